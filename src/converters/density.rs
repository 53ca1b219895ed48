//! 밀도(Density)에서 출발하는 변환 목록.

use crate::converter::{reciprocal, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 밀도 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::single(
            "1 / Density → Specific Volume",
            PhysicalQuantity::Density,
            PhysicalQuantity::SpecificVolume,
            |v: &QuantityValue| match v.unit {
                AnyUnit::Density(DensityUnit::GramPerCubicCentimeter) => reciprocal(
                    v,
                    AnyUnit::Density(DensityUnit::GramPerCubicCentimeter),
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::LiterPerKilogram),
                ),
                AnyUnit::Density(DensityUnit::PoundPerCubicFoot) => reciprocal(
                    v,
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound),
                ),
                _ => reciprocal(
                    v,
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                    AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicMeterPerKilogram),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Density,
            Operator::Times,
            PhysicalQuantity::Volume,
            PhysicalQuantity::Mass,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                ) => times(
                    l,
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                    AnyUnit::Mass(MassUnit::Pound),
                ),
                _ => times(
                    l,
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                    r,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    AnyUnit::Mass(MassUnit::Kilogram),
                ),
            },
        ),
    ]
}
