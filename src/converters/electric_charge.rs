//! 전하(Electric Charge)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 전하 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCharge,
            Operator::Div,
            PhysicalQuantity::Time,
            PhysicalQuantity::ElectricCurrent,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCharge,
            Operator::Div,
            PhysicalQuantity::ElectricCurrent,
            PhysicalQuantity::Time,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::ElectricCharge(ElectricChargeUnit::AmpereHour),
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                ) => div(
                    l,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::AmpereHour),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::Time(TimeUnit::Hour),
                ),
                _ => div(
                    l,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::Time(TimeUnit::Second),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::ElectricCharge,
            Operator::Times,
            PhysicalQuantity::Voltage,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                    r,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    AnyUnit::Energy(EnergyUnit::Joule),
                )
            },
        ),
    ]
}
