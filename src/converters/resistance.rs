//! 전기 저항(Electric Resistance)에서 출발하는 변환 목록.

use crate::converter::{times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 저항 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![QuantityConverter::with_operator(
        PhysicalQuantity::ElectricResistance,
        Operator::Times,
        PhysicalQuantity::ElectricCurrent,
        PhysicalQuantity::Voltage,
        |l: &QuantityValue, r: &QuantityValue| {
            times(
                l,
                AnyUnit::ElectricResistance(ElectricResistanceUnit::Ohm),
                r,
                AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                AnyUnit::Voltage(VoltageUnit::Volt),
            )
        },
    )]
}
