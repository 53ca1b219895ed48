//! 전압(Voltage)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 전압 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Voltage,
            Operator::Times,
            PhysicalQuantity::ElectricCurrent,
            PhysicalQuantity::Power,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::Power(PowerUnit::Watt),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Voltage,
            Operator::Times,
            PhysicalQuantity::ElectricCharge,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    r,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                    AnyUnit::Energy(EnergyUnit::Joule),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Voltage,
            Operator::Div,
            PhysicalQuantity::ElectricCurrent,
            PhysicalQuantity::ElectricResistance,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::ElectricResistance(ElectricResistanceUnit::Ohm),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Voltage,
            Operator::Div,
            PhysicalQuantity::ElectricResistance,
            PhysicalQuantity::ElectricCurrent,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    r,
                    AnyUnit::ElectricResistance(ElectricResistanceUnit::Ohm),
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                )
            },
        ),
    ]
}
