//! 운동량(Momentum)에서 출발하는 변환 목록.

use crate::converter::{div, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 운동량 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Momentum,
            Operator::Div,
            PhysicalQuantity::Time,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Force(ForceUnit::Newton),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Momentum,
            Operator::Div,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Mass,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                ) => div(
                    l,
                    AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    r,
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                    AnyUnit::Mass(MassUnit::Pound),
                ),
                _ => div(
                    l,
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Mass(MassUnit::Kilogram),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Momentum,
            Operator::Div,
            PhysicalQuantity::Mass,
            PhysicalQuantity::Speed,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    AnyUnit::Mass(MassUnit::Pound),
                ) => div(
                    l,
                    AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    r,
                    AnyUnit::Mass(MassUnit::Pound),
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                ),
                _ => div(
                    l,
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                ),
            },
        ),
    ]
}
