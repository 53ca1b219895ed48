//! 비체적(Specific Volume)에서 출발하는 변환 목록.

use crate::converter::{reciprocal, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 비체적 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::single(
            "1 / Specific Volume → Density",
            PhysicalQuantity::SpecificVolume,
            PhysicalQuantity::Density,
            |v: &QuantityValue| match v.unit {
                AnyUnit::SpecificVolume(SpecificVolumeUnit::LiterPerKilogram) => reciprocal(
                    v,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::LiterPerKilogram),
                    AnyUnit::Density(DensityUnit::GramPerCubicCentimeter),
                ),
                AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound) => reciprocal(
                    v,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound),
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                ),
                _ => reciprocal(
                    v,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicMeterPerKilogram),
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::SpecificVolume,
            Operator::Times,
            PhysicalQuantity::Mass,
            PhysicalQuantity::Volume,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound),
                    AnyUnit::Mass(MassUnit::Pound),
                ) => times(
                    l,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound),
                    r,
                    AnyUnit::Mass(MassUnit::Pound),
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                ),
                _ => times(
                    l,
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicMeterPerKilogram),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                ),
            },
        ),
    ]
}
