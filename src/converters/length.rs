//! 길이(Length)에서 출발하는 변환 목록.

use crate::converter::{div, times, ConverterError, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 길이 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Length,
            Operator::Times,
            PhysicalQuantity::Length,
            PhysicalQuantity::Area,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Length(LengthUnit::Foot), _) => times(
                    l,
                    AnyUnit::Length(LengthUnit::Foot),
                    r,
                    AnyUnit::Length(LengthUnit::Foot),
                    AnyUnit::Area(AreaUnit::SquareFoot),
                ),
                (AnyUnit::Length(LengthUnit::Inch), _) => times(
                    l,
                    AnyUnit::Length(LengthUnit::Inch),
                    r,
                    AnyUnit::Length(LengthUnit::Inch),
                    AnyUnit::Area(AreaUnit::SquareInch),
                ),
                // 야드/마일 제곱에 해당하는 면적 단위는 없다
                (AnyUnit::Length(LengthUnit::Yard), _) | (AnyUnit::Length(LengthUnit::Mile), _) => {
                    Err(ConverterError::UnsupportedUnitPair {
                        left: l.unit.symbol(),
                        right: r.unit.symbol(),
                    })
                }
                _ => times(
                    l,
                    AnyUnit::Length(LengthUnit::Meter),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Area(AreaUnit::SquareMeter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Length,
            Operator::Times,
            PhysicalQuantity::Area,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Length(LengthUnit::Foot), AnyUnit::Area(AreaUnit::SquareFoot)) => times(
                    l,
                    AnyUnit::Length(LengthUnit::Foot),
                    r,
                    AnyUnit::Area(AreaUnit::SquareFoot),
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                ),
                (AnyUnit::Length(LengthUnit::Inch), AnyUnit::Area(AreaUnit::SquareInch)) => times(
                    l,
                    AnyUnit::Length(LengthUnit::Inch),
                    r,
                    AnyUnit::Area(AreaUnit::SquareInch),
                    AnyUnit::Volume(VolumeUnit::CubicInch),
                ),
                _ => times(
                    l,
                    AnyUnit::Length(LengthUnit::Meter),
                    r,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Length,
            Operator::Times,
            PhysicalQuantity::Force,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (_, AnyUnit::Force(ForceUnit::PoundForce)) => times(
                    l,
                    AnyUnit::Length(LengthUnit::Foot),
                    r,
                    AnyUnit::Force(ForceUnit::PoundForce),
                    AnyUnit::Energy(EnergyUnit::FootPound),
                ),
                _ => times(
                    l,
                    AnyUnit::Length(LengthUnit::Meter),
                    r,
                    AnyUnit::Force(ForceUnit::Newton),
                    AnyUnit::Energy(EnergyUnit::Joule),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Length,
            Operator::Div,
            PhysicalQuantity::Time,
            PhysicalQuantity::Speed,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Length(LengthUnit::Kilometer), AnyUnit::Time(TimeUnit::Hour)) => div(
                    l,
                    AnyUnit::Length(LengthUnit::Kilometer),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Speed(SpeedUnit::KilometerPerHour),
                ),
                (AnyUnit::Length(LengthUnit::Mile), AnyUnit::Time(TimeUnit::Hour)) => div(
                    l,
                    AnyUnit::Length(LengthUnit::Mile),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Speed(SpeedUnit::MilePerHour),
                ),
                (AnyUnit::Length(LengthUnit::Foot), _) => div(
                    l,
                    AnyUnit::Length(LengthUnit::Foot),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                ),
                _ => div(
                    l,
                    AnyUnit::Length(LengthUnit::Meter),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Length,
            Operator::Div,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Time,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Length(LengthUnit::Meter),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Time(TimeUnit::Second),
                )
            },
        ),
    ]
}
