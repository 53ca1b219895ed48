//! 체적(Volume)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 체적 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Volume,
            Operator::Times,
            PhysicalQuantity::Density,
            PhysicalQuantity::Mass,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                ) => times(
                    l,
                    AnyUnit::Volume(VolumeUnit::CubicFoot),
                    r,
                    AnyUnit::Density(DensityUnit::PoundPerCubicFoot),
                    AnyUnit::Mass(MassUnit::Pound),
                ),
                _ => times(
                    l,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    r,
                    AnyUnit::Density(DensityUnit::KilogramPerCubicMeter),
                    AnyUnit::Mass(MassUnit::Kilogram),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Volume,
            Operator::Times,
            PhysicalQuantity::Pressure,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    r,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    AnyUnit::Energy(EnergyUnit::Joule),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Volume,
            Operator::Div,
            PhysicalQuantity::Area,
            PhysicalQuantity::Length,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    r,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    AnyUnit::Length(LengthUnit::Meter),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Volume,
            Operator::Div,
            PhysicalQuantity::Length,
            PhysicalQuantity::Area,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Volume(VolumeUnit::CubicMeter),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Area(AreaUnit::SquareMeter),
                )
            },
        ),
    ]
}
