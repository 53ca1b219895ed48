//! 압력(Pressure)에서 출발하는 변환 목록.

use crate::converter::{times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 압력 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Pressure,
            Operator::Times,
            PhysicalQuantity::Area,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Pressure(PressureUnit::Psi), AnyUnit::Area(AreaUnit::SquareInch)) => {
                    times(
                        l,
                        AnyUnit::Pressure(PressureUnit::Psi),
                        r,
                        AnyUnit::Area(AreaUnit::SquareInch),
                        AnyUnit::Force(ForceUnit::PoundForce),
                    )
                }
                _ => times(
                    l,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    r,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Pressure,
            Operator::Times,
            PhysicalQuantity::Volume,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    AnyUnit::Energy(EnergyUnit::Joule),
                )
            },
        ),
    ]
}
