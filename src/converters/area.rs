//! 면적(Area)에서 출발하는 변환 목록.

use crate::converter::{div, times, ConverterError, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 면적 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Area,
            Operator::Times,
            PhysicalQuantity::Length,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Area(AreaUnit::SquareFoot), AnyUnit::Length(LengthUnit::Foot)) => times(
                    l,
                    AnyUnit::Area(AreaUnit::SquareFoot),
                    r,
                    AnyUnit::Length(LengthUnit::Foot),
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                ),
                (AnyUnit::Area(AreaUnit::SquareInch), AnyUnit::Length(LengthUnit::Inch)) => times(
                    l,
                    AnyUnit::Area(AreaUnit::SquareInch),
                    r,
                    AnyUnit::Length(LengthUnit::Inch),
                    AnyUnit::Volume(VolumeUnit::CubicInch),
                ),
                // km² 높이 곱에 해당하는 체적 단위는 없다
                (AnyUnit::Area(AreaUnit::SquareKilometer), _) => {
                    Err(ConverterError::UnsupportedUnitPair {
                        left: l.unit.symbol(),
                        right: r.unit.symbol(),
                    })
                }
                _ => times(
                    l,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Area,
            Operator::Times,
            PhysicalQuantity::Pressure,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                // psi × in² = lbf
                (AnyUnit::Area(AreaUnit::SquareInch), AnyUnit::Pressure(PressureUnit::Psi)) => {
                    times(
                        l,
                        AnyUnit::Area(AreaUnit::SquareInch),
                        r,
                        AnyUnit::Pressure(PressureUnit::Psi),
                        AnyUnit::Force(ForceUnit::PoundForce),
                    )
                }
                _ => times(
                    l,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    r,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Area,
            Operator::Div,
            PhysicalQuantity::Length,
            PhysicalQuantity::Length,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Length(LengthUnit::Meter),
                )
            },
        ),
    ]
}
