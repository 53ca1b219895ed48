//! 시간(Time)에서 출발하는 변환 목록.

use crate::converter::{reciprocal, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 시간 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::single(
            "1 / Time → Frequency",
            PhysicalQuantity::Time,
            PhysicalQuantity::Frequency,
            |v: &QuantityValue| {
                reciprocal(
                    v,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Frequency(FrequencyUnit::Hertz),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Time,
            Operator::Times,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Length,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Time(TimeUnit::Hour), AnyUnit::Speed(SpeedUnit::KilometerPerHour)) => {
                    times(
                        l,
                        AnyUnit::Time(TimeUnit::Hour),
                        r,
                        AnyUnit::Speed(SpeedUnit::KilometerPerHour),
                        AnyUnit::Length(LengthUnit::Kilometer),
                    )
                }
                (AnyUnit::Time(TimeUnit::Hour), AnyUnit::Speed(SpeedUnit::MilePerHour)) => times(
                    l,
                    AnyUnit::Time(TimeUnit::Hour),
                    r,
                    AnyUnit::Speed(SpeedUnit::MilePerHour),
                    AnyUnit::Length(LengthUnit::Mile),
                ),
                _ => times(
                    l,
                    AnyUnit::Time(TimeUnit::Second),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Length(LengthUnit::Meter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Time,
            Operator::Times,
            PhysicalQuantity::Acceleration,
            PhysicalQuantity::Speed,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Time(TimeUnit::Second),
                    r,
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Time,
            Operator::Times,
            PhysicalQuantity::Power,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Time(TimeUnit::Hour), AnyUnit::Power(PowerUnit::Kilowatt)) => times(
                    l,
                    AnyUnit::Time(TimeUnit::Hour),
                    r,
                    AnyUnit::Power(PowerUnit::Kilowatt),
                    AnyUnit::Energy(EnergyUnit::KilowattHour),
                ),
                (AnyUnit::Time(TimeUnit::Hour), AnyUnit::Power(PowerUnit::Watt)) => times(
                    l,
                    AnyUnit::Time(TimeUnit::Hour),
                    r,
                    AnyUnit::Power(PowerUnit::Watt),
                    AnyUnit::Energy(EnergyUnit::WattHour),
                ),
                _ => times(
                    l,
                    AnyUnit::Time(TimeUnit::Second),
                    r,
                    AnyUnit::Power(PowerUnit::Watt),
                    AnyUnit::Energy(EnergyUnit::Joule),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Time,
            Operator::Times,
            PhysicalQuantity::ElectricCurrent,
            PhysicalQuantity::ElectricCharge,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Time(TimeUnit::Hour), AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere)) => {
                    times(
                        l,
                        AnyUnit::Time(TimeUnit::Hour),
                        r,
                        AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                        AnyUnit::ElectricCharge(ElectricChargeUnit::AmpereHour),
                    )
                }
                (
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Milliampere),
                ) => times(
                    l,
                    AnyUnit::Time(TimeUnit::Hour),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Milliampere),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::MilliampereHour),
                ),
                _ => times(
                    l,
                    AnyUnit::Time(TimeUnit::Second),
                    r,
                    AnyUnit::ElectricCurrent(ElectricCurrentUnit::Ampere),
                    AnyUnit::ElectricCharge(ElectricChargeUnit::Coulomb),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Time,
            Operator::Times,
            PhysicalQuantity::Force,
            PhysicalQuantity::Momentum,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Time(TimeUnit::Second),
                    r,
                    AnyUnit::Force(ForceUnit::Newton),
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                )
            },
        ),
    ]
}
