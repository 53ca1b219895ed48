//! 에너지(Energy)에서 출발하는 변환 목록.

use crate::converter::{div, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 에너지 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Time,
            PhysicalQuantity::Power,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Energy(EnergyUnit::Btu), AnyUnit::Time(TimeUnit::Hour)) => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Btu),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Power(PowerUnit::BtuPerHour),
                ),
                (AnyUnit::Energy(EnergyUnit::FootPound), _) => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::FootPound),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Power(PowerUnit::FootPoundPerSecond),
                ),
                (AnyUnit::Energy(EnergyUnit::KilowattHour), AnyUnit::Time(TimeUnit::Hour)) => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::KilowattHour),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Power(PowerUnit::Kilowatt),
                ),
                _ => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Power(PowerUnit::Watt),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Power,
            PhysicalQuantity::Time,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Energy(EnergyUnit::KilowattHour), AnyUnit::Power(PowerUnit::Kilowatt)) => {
                    div(
                        l,
                        AnyUnit::Energy(EnergyUnit::KilowattHour),
                        r,
                        AnyUnit::Power(PowerUnit::Kilowatt),
                        AnyUnit::Time(TimeUnit::Hour),
                    )
                }
                _ => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Power(PowerUnit::Watt),
                    AnyUnit::Time(TimeUnit::Second),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Length,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Energy(EnergyUnit::FootPound), AnyUnit::Length(LengthUnit::Foot)) => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::FootPound),
                    r,
                    AnyUnit::Length(LengthUnit::Foot),
                    AnyUnit::Force(ForceUnit::PoundForce),
                ),
                _ => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Force,
            PhysicalQuantity::Length,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Energy(EnergyUnit::FootPound), AnyUnit::Force(ForceUnit::PoundForce)) => {
                    div(
                        l,
                        AnyUnit::Energy(EnergyUnit::FootPound),
                        r,
                        AnyUnit::Force(ForceUnit::PoundForce),
                        AnyUnit::Length(LengthUnit::Foot),
                    )
                }
                _ => div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Force(ForceUnit::Newton),
                    AnyUnit::Length(LengthUnit::Meter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::ElectricCharge,
            PhysicalQuantity::Voltage,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                    AnyUnit::Voltage(VoltageUnit::Volt),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Voltage,
            PhysicalQuantity::ElectricCharge,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Voltage(VoltageUnit::Volt),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Volume,
            PhysicalQuantity::Pressure,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    AnyUnit::Pressure(PressureUnit::Pascal),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Energy,
            Operator::Div,
            PhysicalQuantity::Pressure,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Energy(EnergyUnit::Joule),
                    r,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                )
            },
        ),
    ]
}
