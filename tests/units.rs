//! 단위 환산 회귀 테스트.
use quantity_converter_toolbox::conversion::{convert, convert_to_unit};
use quantity_converter_toolbox::quantity::{PhysicalQuantity, QuantityValue};

#[test]
fn meter_to_foot() {
    let ft = convert(PhysicalQuantity::Length, 1.0, "m", "ft").unwrap();
    assert!((ft - 3.28084).abs() < 1e-4);
}

#[test]
fn mile_to_kilometer() {
    let km = convert(PhysicalQuantity::Length, 1.0, "mi", "km").unwrap();
    assert!((km - 1.609344).abs() < 1e-9);
}

#[test]
fn psi_to_kpa() {
    let kpa = convert(PhysicalQuantity::Pressure, 1.0, "psi", "kPa").unwrap();
    assert!((kpa - 6.894757).abs() < 1e-4);
}

#[test]
fn pound_to_kilogram() {
    let kg = convert(PhysicalQuantity::Mass, 1.0, "lb", "kg").unwrap();
    assert!((kg - 0.45359237).abs() < 1e-10);
}

#[test]
fn kilowatt_hour_to_joule() {
    let j = convert(PhysicalQuantity::Energy, 1.0, "kWh", "J").unwrap();
    assert!((j - 3.6e6).abs() < 1e-6);
}

#[test]
fn horsepower_to_watt() {
    let w = convert(PhysicalQuantity::Power, 1.0, "hp", "W").unwrap();
    assert!((w - 745.6998715822702).abs() < 1e-6);
}

#[test]
fn celsius_to_fahrenheit() {
    let f = convert(PhysicalQuantity::Temperature, 100.0, "°C", "°F").unwrap();
    assert!((f - 212.0).abs() < 1e-9);
}

#[test]
fn kelvin_to_rankine() {
    let r = convert(PhysicalQuantity::Temperature, 100.0, "K", "R").unwrap();
    assert!((r - 180.0).abs() < 1e-9);
}

#[test]
fn knot_to_meter_per_second() {
    let mps = convert(PhysicalQuantity::Speed, 1.0, "kn", "m/s").unwrap();
    assert!((mps - 1852.0 / 3600.0).abs() < 1e-9);
}

#[test]
fn milliampere_hour_to_coulomb() {
    let c = convert(PhysicalQuantity::ElectricCharge, 1000.0, "mAh", "C").unwrap();
    assert!((c - 3600.0).abs() < 1e-9);
}

#[test]
fn millivolt_to_volt() {
    let v = convert(PhysicalQuantity::Voltage, 1500.0, "mV", "V").unwrap();
    assert!((v - 1.5).abs() < 1e-12);
}

#[test]
fn round_trips_are_identity() {
    for q in PhysicalQuantity::ALL {
        let units = q.units();
        let reference = units[0];
        for unit in units {
            let out = convert_to_unit(&QuantityValue::new(3.75, reference), unit).unwrap();
            let back = convert_to_unit(&out, reference).unwrap();
            assert!(
                (back.value - 3.75).abs() < 1e-9,
                "{} -> {} -> {} drifted: {}",
                reference.symbol(),
                unit.symbol(),
                reference.symbol(),
                back.value
            );
        }
    }
}

#[test]
fn unknown_unit_is_rejected() {
    let err = convert(PhysicalQuantity::Length, 1.0, "furlong", "m");
    assert!(err.is_err(), "expected parse failure, got {err:?}");
}
