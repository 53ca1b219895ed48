//! 질량(Mass)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 질량 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Mass,
            Operator::Times,
            PhysicalQuantity::Acceleration,
            PhysicalQuantity::Force,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                // 표준 중력 가속도 곱은 kgf 그대로 읽힌다
                (
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Acceleration(AccelerationUnit::StandardGravity),
                ) => times(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::Acceleration(AccelerationUnit::StandardGravity),
                    AnyUnit::Force(ForceUnit::KilogramForce),
                ),
                _ => times(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                    AnyUnit::Force(ForceUnit::Newton),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Mass,
            Operator::Times,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Momentum,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Mass(MassUnit::Pound), AnyUnit::Speed(SpeedUnit::FootPerSecond)) => {
                    times(
                        l,
                        AnyUnit::Mass(MassUnit::Pound),
                        r,
                        AnyUnit::Speed(SpeedUnit::FootPerSecond),
                        AnyUnit::Momentum(MomentumUnit::PoundFootPerSecond),
                    )
                }
                _ => times(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Mass,
            Operator::Times,
            PhysicalQuantity::SpecificVolume,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicMeterPerKilogram),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Mass,
            Operator::Div,
            PhysicalQuantity::Volume,
            PhysicalQuantity::Density,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Mass(MassUnit::Pound), AnyUnit::Volume(VolumeUnit::CubicFoot)) => div(
                    l,
                    AnyUnit::Mass(MassUnit::Pound),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                ),
                (AnyUnit::Mass(MassUnit::Gram), AnyUnit::Volume(VolumeUnit::Milliliter)) => div(
                    l,
                    AnyUnit::Mass(MassUnit::Gram),
                    r,
                    AnyUnit::Volume(VolumeUnit::Milliliter),
                    AnyUnit::Density(DensityUnit::GramPerCubicCentimeter),
                ),
                _ => div(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Mass,
            Operator::Div,
            PhysicalQuantity::Density,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    r,
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                )
            },
        ),
    ]
}
