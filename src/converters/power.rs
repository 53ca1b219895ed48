//! 동력(Power)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 동력 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Power,
            Operator::Times,
            PhysicalQuantity::Time,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Power(PowerUnit::Kilowatt), AnyUnit::Time(TimeUnit::Hour)) => times(
                    l,
                    AnyUnit::Power(PowerUnit::Kilowatt),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Energy(EnergyUnit::KilowattHour),
                ),
                (AnyUnit::Power(PowerUnit::Watt), AnyUnit::Time(TimeUnit::Hour)) => times(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Energy(EnergyUnit::WattHour),
                ),
                (AnyUnit::Power(PowerUnit::BtuPerHour), AnyUnit::Time(TimeUnit::Hour)) => times(
                    l,
                    AnyUnit::Power(PowerUnit::BtuPerHour),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Energy(EnergyUnit::Btu),
                ),
                _ => times(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Energy(EnergyUnit::Joule),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Power,
            Operator::Div,
            PhysicalQuantity::Force,
            PhysicalQuantity::Speed,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::Force(ForceUnit::Newton),
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Power,
            Operator::Div,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Power(PowerUnit::FootPoundPerSecond),
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                ) => div(
                    l,
                    AnyUnit::Power(PowerUnit::FootPoundPerSecond),
                    r,
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                    AnyUnit::Force(ForceUnit::PoundForce),
                ),
                _ => div(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Power,
            Operator::Div,
            PhysicalQuantity::ElectricCurrent,
            PhysicalQuantity::Voltage,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::Voltage(VoltageUnit::Volt),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Power,
            Operator::Div,
            PhysicalQuantity::Voltage,
            PhysicalQuantity::ElectricCurrent,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Power(PowerUnit::Watt),
                    r,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                )
            },
        ),
    ]
}
