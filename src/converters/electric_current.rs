//! 전류(Electric Current)에서 출발하는 변환 목록.

use crate::converter::{times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 전류 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCurrent,
            Operator::Times,
            PhysicalQuantity::Time,
            PhysicalQuantity::ElectricCharge,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::Time(TimeUnit::Hour),
                ) => times(
                    l,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::AmpereHour),
                ),
                (
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Milliampere),
                    AnyUnit::Time(TimeUnit::Hour),
                ) => times(
                    l,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Milliampere),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::MilliampereHour),
                ),
                _ => times(
                    l,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCurrent,
            Operator::Times,
            PhysicalQuantity::ElectricResistance,
            PhysicalQuantity::Voltage,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    r,
                    AnyUnit::ElectricResistance(ElectricResistanceUnit::Ohm),
                    AnyUnit::Voltage(VoltageUnit::Volt),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCurrent,
            Operator::Times,
            PhysicalQuantity::Voltage,
            PhysicalQuantity::Power,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    r,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    AnyUnit::Power(PowerUnit::Watt),
                )
            },
        ),
    ]
}
