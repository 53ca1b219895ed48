//! 속도(Speed)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 속도 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Speed,
            Operator::Times,
            PhysicalQuantity::Time,
            PhysicalQuantity::Length,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Speed(SpeedUnit::KilometerPerHour), AnyUnit::Time(TimeUnit::Hour)) => {
                    times(
                        l,
                        AnyUnit::Speed(SpeedUnit::KilometerPerHour),
                        r,
                        AnyUnit::Time(TimeUnit::Hour),
                        AnyUnit::Length(LengthUnit::Kilometer),
                    )
                }
                (AnyUnit::Speed(SpeedUnit::MilePerHour), AnyUnit::Time(TimeUnit::Hour)) => times(
                    l,
                    AnyUnit::Speed(SpeedUnit::MilePerHour),
                    r,
                    AnyUnit::Time(TimeUnit::Hour),
                    AnyUnit::Length(LengthUnit::Mile),
                ),
                (AnyUnit::Speed(SpeedUnit::FootPerSecond), _) => times(
                    l,
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Length(LengthUnit::Foot),
                ),
                _ => times(
                    l,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Length(LengthUnit::Meter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Speed,
            Operator::Times,
            PhysicalQuantity::Mass,
            PhysicalQuantity::Momentum,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Speed(SpeedUnit::FootPerSecond), AnyUnit::Mass(MassUnit::Pound)) => {
                    times(
                        l,
                        AnyUnit::Speed(SpeedUnit::FootPerSecond),
                        r,
                        AnyUnit::Mass(MassUnit::Pound),
                        AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    )
                }
                _ => times(
                    l,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Speed,
            Operator::Times,
            PhysicalQuantity::Force,
            PhysicalQuantity::Power,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    r,
                    AnyUnit::Force(ForceUnit::Newton),
                    AnyUnit::Power(PowerUnit::Watt),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Speed,
            Operator::Div,
            PhysicalQuantity::Time,
            PhysicalQuantity::Acceleration,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Speed(SpeedUnit::FootPerSecond), _) => div(
                    l,
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Acceleration(AccelerationUnit::FootPerSquareSecond),
                ),
                _ => div(
                    l,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                ),
            },
        ),
    ]
}
