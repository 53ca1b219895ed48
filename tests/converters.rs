//! 물리량 변환기 동작 회귀 테스트.
use quantity_converter_toolbox::converter::{ConverterError, Operator};
use quantity_converter_toolbox::converters;
use quantity_converter_toolbox::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use quantity_converter_toolbox::units::*;

fn find_converter(
    source: PhysicalQuantity,
    operator: Operator,
    right: PhysicalQuantity,
    result: PhysicalQuantity,
) -> quantity_converter_toolbox::converter::QuantityConverter {
    converters::converters_for(source)
        .into_iter()
        .find(|c| c.operand() == Some((operator, right)) && c.target() == result)
        .unwrap_or_else(|| {
            panic!(
                "converter not found: {} {} {} -> {}",
                source.name(),
                operator.symbol(),
                right.name(),
                result.name()
            )
        })
}

#[test]
fn length_times_length_in_meters_gives_square_meters() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Times,
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
    );
    let l = QuantityValue::new(2.0, AnyUnit::Length(LengthUnit::Meter));
    let r = QuantityValue::new(3.0, AnyUnit::Length(LengthUnit::Meter));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(out.unit, AnyUnit::Area(AreaUnit::SquareMeter));
    assert!((out.value - 6.0).abs() < 1e-12);
}

#[test]
fn foot_times_length_stays_in_feet() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Times,
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
    );
    let l = QuantityValue::new(2.0, AnyUnit::Length(LengthUnit::Foot));
    let r = QuantityValue::new(1.0, AnyUnit::Length(LengthUnit::Meter));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(out.unit, AnyUnit::Area(AreaUnit::SquareFoot));
    // 1 m = 3.28084 ft 이므로 2 ft × 3.28084 ft
    assert!((out.value - 2.0 / 0.3048).abs() < 1e-6);
}

#[test]
fn yard_squared_has_no_area_unit() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Times,
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
    );
    let l = QuantityValue::new(2.0, AnyUnit::Length(LengthUnit::Yard));
    let r = QuantityValue::new(2.0, AnyUnit::Length(LengthUnit::Yard));
    match conv.convert_with(&l, &r) {
        Err(ConverterError::UnsupportedUnitPair { left, right }) => {
            assert_eq!(left, "yd");
            assert_eq!(right, "yd");
        }
        other => panic!("expected UnsupportedUnitPair, got {other:?}"),
    }
}

#[test]
fn quantity_guard_rejects_wrong_left_operand() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Times,
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
    );
    let l = QuantityValue::new(2.0, AnyUnit::Mass(MassUnit::Kilogram));
    let r = QuantityValue::new(3.0, AnyUnit::Length(LengthUnit::Meter));
    match conv.convert_with(&l, &r) {
        Err(ConverterError::QuantityMismatch { expected, actual }) => {
            assert_eq!(expected, PhysicalQuantity::Length);
            assert_eq!(actual, PhysicalQuantity::Mass);
        }
        other => panic!("expected QuantityMismatch, got {other:?}"),
    }
}

#[test]
fn binary_converter_rejects_unary_call() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Div,
        PhysicalQuantity::Time,
        PhysicalQuantity::Speed,
    );
    let v = QuantityValue::new(1.0, AnyUnit::Length(LengthUnit::Meter));
    assert!(matches!(
        conv.convert(&v),
        Err(ConverterError::ArityMismatch { .. })
    ));
}

#[test]
fn time_reciprocal_gives_frequency() {
    let conv = converters::converters_for(PhysicalQuantity::Time)
        .into_iter()
        .find(|c| c.target() == PhysicalQuantity::Frequency)
        .expect("time -> frequency converter");
    assert!(conv.operand().is_none());
    let v = QuantityValue::new(0.5, AnyUnit::Time(TimeUnit::Second));
    let out = conv.convert(&v).unwrap();
    assert_eq!(out.unit, AnyUnit::Frequency(FrequencyUnit::Hertz));
    assert!((out.value - 2.0).abs() < 1e-12);
}

#[test]
fn frequency_reciprocal_roundtrips_milliseconds() {
    let conv = converters::converters_for(PhysicalQuantity::Frequency)
        .into_iter()
        .find(|c| c.target() == PhysicalQuantity::Time)
        .expect("frequency -> time converter");
    let v = QuantityValue::new(0.2, AnyUnit::Frequency(FrequencyUnit::Kilohertz));
    let out = conv.convert(&v).unwrap();
    // 200 Hz → 5 ms = 0.005 s
    assert_eq!(out.unit, AnyUnit::Time(TimeUnit::Second));
    assert!((out.value - 0.005).abs() < 1e-12);
}

#[test]
fn kilowatt_times_hour_gives_kilowatt_hours() {
    let conv = find_converter(
        PhysicalQuantity::Power,
        Operator::Times,
        PhysicalQuantity::Time,
        PhysicalQuantity::Energy,
    );
    let l = QuantityValue::new(1.5, AnyUnit::Power(PowerUnit::Kilowatt));
    let r = QuantityValue::new(2.0, AnyUnit::Time(TimeUnit::Hour));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(out.unit, AnyUnit::Energy(EnergyUnit::KilowattHour));
    assert!((out.value - 3.0).abs() < 1e-12);
}

#[test]
fn pound_force_times_foot_gives_foot_pounds() {
    let conv = find_converter(
        PhysicalQuantity::Force,
        Operator::Times,
        PhysicalQuantity::Length,
        PhysicalQuantity::Energy,
    );
    let l = QuantityValue::new(10.0, AnyUnit::Force(ForceUnit::PoundForce));
    let r = QuantityValue::new(3.0, AnyUnit::Length(LengthUnit::Foot));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(out.unit, AnyUnit::Energy(EnergyUnit::FootPound));
    assert!((out.value - 30.0).abs() < 1e-12);
}

#[test]
fn kilometers_divided_by_hours_gives_kmh() {
    let conv = find_converter(
        PhysicalQuantity::Length,
        Operator::Div,
        PhysicalQuantity::Time,
        PhysicalQuantity::Speed,
    );
    let l = QuantityValue::new(120.0, AnyUnit::Length(LengthUnit::Kilometer));
    let r = QuantityValue::new(2.0, AnyUnit::Time(TimeUnit::Hour));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(out.unit, AnyUnit::Speed(SpeedUnit::KilometerPerHour));
    assert!((out.value - 60.0).abs() < 1e-12);
}

#[test]
fn voltage_divided_by_current_gives_ohms() {
    let conv = find_converter(
        PhysicalQuantity::Voltage,
        Operator::Div,
        PhysicalQuantity::ElectricCurrent,
        PhysicalQuantity::ElectricResistance,
    );
    let l = QuantityValue::new(12.0, AnyUnit::Voltage(VoltageUnit::Volt));
    let r = QuantityValue::new(500.0, AnyUnit::ElectricCurrent(ElectricCurrentUnit::Milliampere));
    let out = conv.convert_with(&l, &r).unwrap();
    assert_eq!(
        out.unit,
        AnyUnit::ElectricResistance(ElectricResistanceUnit::Ohm)
    );
    assert!((out.value - 24.0).abs() < 1e-9);
}

#[test]
fn density_reciprocal_keeps_unit_family() {
    let conv = converters::converters_for(PhysicalQuantity::Density)
        .into_iter()
        .find(|c| c.target() == PhysicalQuantity::SpecificVolume)
        .expect("density -> specific volume converter");
    let v = QuantityValue::new(62.42796, AnyUnit::Density(DensityUnit::PoundPerCubicFoot));
    let out = conv.convert(&v).unwrap();
    assert_eq!(
        out.unit,
        AnyUnit::SpecificVolume(SpecificVolumeUnit::CubicFootPerPound)
    );
    // 물의 밀도 근사: 역수는 약 0.016 ft3/lb
    assert!((out.value - 1.0 / 62.42796).abs() < 1e-9);
}

#[test]
fn temperature_catalog_is_empty() {
    assert!(converters::converters_for(PhysicalQuantity::Temperature).is_empty());
}
