//! 힘(Force)에서 출발하는 변환 목록.

use crate::converter::{div, times, Operator, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 힘 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Times,
            PhysicalQuantity::Length,
            PhysicalQuantity::Energy,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Force(ForceUnit::PoundForce), _) => times(
                    l,
                    AnyUnit::Force(ForceUnit::PoundForce),
                    r,
                    AnyUnit::Length(LengthUnit::Foot),
                    AnyUnit::Energy(EnergyUnit::FootPound),
                ),
                _ => times(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Length(LengthUnit::Meter),
                    AnyUnit::Energy(EnergyUnit::Joule),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Times,
            PhysicalQuantity::Speed,
            PhysicalQuantity::Power,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Force(ForceUnit::PoundForce), AnyUnit::Speed(SpeedUnit::FootPerSecond)) => {
                    times(
                        l,
                        AnyUnit::Force(ForceUnit::PoundForce),
                        r,
                        AnyUnit::Speed(SpeedUnit::FootPerSecond),
                        AnyUnit::Power(PowerUnit::FootPoundPerSecond),
                    )
                }
                _ => times(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Speed(SpeedUnit::MeterPerSecond),
                    AnyUnit::Power(PowerUnit::Watt),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Times,
            PhysicalQuantity::Time,
            PhysicalQuantity::Momentum,
            |l: &QuantityValue, r: &QuantityValue| {
                times(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Time(TimeUnit::Second),
                    AnyUnit::Momentum(MomentumUnit::KilogramMeterPerSecond),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Div,
            PhysicalQuantity::Area,
            PhysicalQuantity::Pressure,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Force(ForceUnit::PoundForce), AnyUnit::Area(AreaUnit::SquareInch)) => {
                    div(
                        l,
                        AnyUnit::Force(ForceUnit::PoundForce),
                        r,
                        AnyUnit::Area(AreaUnit::SquareInch),
                        AnyUnit::Pressure(PressureUnit::Psi),
                    )
                }
                _ => div(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Area(AreaUnit::SquareMeter),
                    AnyUnit::Pressure(PressureUnit::Pascal),
                ),
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Div,
            PhysicalQuantity::Mass,
            PhysicalQuantity::Acceleration,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Mass(MassUnit::Kilogram),
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Div,
            PhysicalQuantity::Acceleration,
            PhysicalQuantity::Mass,
            |l: &QuantityValue, r: &QuantityValue| {
                div(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Acceleration(AccelerationUnit::MeterPerSquareSecond),
                    AnyUnit::Mass(MassUnit::Kilogram),
                )
            },
        ),
        QuantityConverter::with_operator(
            PhysicalQuantity::Force,
            Operator::Div,
            PhysicalQuantity::Pressure,
            PhysicalQuantity::Area,
            |l: &QuantityValue, r: &QuantityValue| match (l.unit, r.unit) {
                (AnyUnit::Force(ForceUnit::PoundForce), AnyUnit::Pressure(PressureUnit::Psi)) => {
                    div(
                        l,
                        AnyUnit::Force(ForceUnit::PoundForce),
                        r,
                        AnyUnit::Pressure(PressureUnit::Psi),
                        AnyUnit::Area(AreaUnit::SquareInch),
                    )
                }
                _ => div(
                    l,
                    AnyUnit::Force(ForceUnit::Newton),
                    r,
                    AnyUnit::Pressure(PressureUnit::Pascal),
                    AnyUnit::Area(AreaUnit::SquareMeter),
                ),
            },
        ),
    ]
}
