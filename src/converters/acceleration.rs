//! 가속도(Acceleration)에서 출발하는 변환 목록.

use crate::converter::{times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 가속도 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Acceleration,
            Operator::Times,
            PhysicalQuantity::Mass,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Acceleration(AccelerationUnit::StandardGravity),
                    AnyUnit::Mass(MassUnit::Kilogram),
                ) => times(
                    l,
                    AnyUnit::Acceleration(AccelerationUnit::StandardGravity),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Force(ForceUnit::KilogramForce),
                ),
                _ => times(
                    l,
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Acceleration,
            Operator::Times,
            PhysicalQuantity::Time,
            PhysicalQuantity::Speed,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Acceleration(AccelerationUnit::FootPerSquareSecond), _) => times(
                    l,
                    AnyUnit::Acceleration(AccelerationUnit::FootPerSquareSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Speed(SpeedUnit::FootPerSecond),
                ),
                _ => times(
                    l,
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                ),
            },
        ),
    ]
}
