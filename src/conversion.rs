use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 값의 물리량이 요청한 물리량과 일치하지 않음
    QuantityMismatch {
        expected: PhysicalQuantity,
        actual: PhysicalQuantity,
    },
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::QuantityMismatch { expected, actual } => write!(
                f,
                "물리량 불일치: {} 필요, {} 입력",
                expected.name(),
                actual.name()
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 같은 물리량 안에서 값을 지정한 단위로 환산한다.
///
/// 물리량이 다른 단위로의 환산 요청은 `QuantityMismatch`로 거절한다.
pub fn convert_to_unit(
    value: &QuantityValue,
    target: AnyUnit,
) -> Result<QuantityValue, ConversionError> {
    let converted = match (value.unit, target) {
        (AnyUnit::Length(f), AnyUnit::Length(t)) => convert_length(value.value, f, t),
        (AnyUnit::Area(f), AnyUnit::Area(t)) => convert_area(value.value, f, t),
        (AnyUnit::Volume(f), AnyUnit::Volume(t)) => convert_volume(value.value, f, t),
        (AnyUnit::Time(f), AnyUnit::Time(t)) => convert_time(value.value, f, t),
        (AnyUnit::Frequency(f), AnyUnit::Frequency(t)) => convert_frequency(value.value, f, t),
        (AnyUnit::Mass(f), AnyUnit::Mass(t)) => convert_mass(value.value, f, t),
        (AnyUnit::Density(f), AnyUnit::Density(t)) => convert_density(value.value, f, t),
        (AnyUnit::SpecificVolume(f), AnyUnit::SpecificVolume(t)) => {
            convert_specific_volume(value.value, f, t)
        }
        (AnyUnit::Speed(f), AnyUnit::Speed(t)) => convert_speed(value.value, f, t),
        (AnyUnit::Acceleration(f), AnyUnit::Acceleration(t)) => {
            convert_acceleration(value.value, f, t)
        }
        (AnyUnit::Momentum(f), AnyUnit::Momentum(t)) => convert_momentum(value.value, f, t),
        (AnyUnit::Force(f), AnyUnit::Force(t)) => convert_force(value.value, f, t),
        (AnyUnit::Pressure(f), AnyUnit::Pressure(t)) => convert_pressure(value.value, f, t),
        (AnyUnit::Energy(f), AnyUnit::Energy(t)) => convert_energy(value.value, f, t),
        (AnyUnit::Power(f), AnyUnit::Power(t)) => convert_power(value.value, f, t),
        (AnyUnit::ElectricCurrent(f), AnyUnit::ElectricCurrent(t)) => {
            convert_electric_current(value.value, f, t)
        }
        (AnyUnit::ElectricCharge(f), AnyUnit::ElectricCharge(t)) => {
            convert_electric_charge(value.value, f, t)
        }
        (AnyUnit::Voltage(f), AnyUnit::Voltage(t)) => convert_voltage(value.value, f, t),
        (AnyUnit::ElectricResistance(f), AnyUnit::ElectricResistance(t)) => {
            convert_resistance(value.value, f, t)
        }
        (AnyUnit::Temperature(f), AnyUnit::Temperature(t)) => {
            convert_temperature(value.value, f, t)
        }
        _ => {
            return Err(ConversionError::QuantityMismatch {
                expected: target.quantity(),
                actual: value.quantity(),
            })
        }
    };
    Ok(QuantityValue::new(converted, target))
}

/// 문자열로 전달된 단위명을 해석한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `m`, `psi`, `kWh`, `ft/s`, `°C` 등을 사용할 수 있다.
pub fn convert(
    quantity: PhysicalQuantity,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let from = parse_unit(quantity, from_unit_str)?;
    let to = parse_unit(quantity, to_unit_str)?;
    let converted = convert_to_unit(&QuantityValue::new(value, from), to)?;
    Ok(converted.value)
}

/// 문자열 단위명을 물리량에 맞는 단위로 해석한다.
pub fn parse_unit(quantity: PhysicalQuantity, s: &str) -> Result<AnyUnit, ConversionError> {
    match quantity {
        PhysicalQuantity::Length => parse_length_unit(s).map(AnyUnit::Length),
        PhysicalQuantity::Area => parse_area_unit(s).map(AnyUnit::Area),
        PhysicalQuantity::Volume => parse_volume_unit(s).map(AnyUnit::Volume),
        PhysicalQuantity::Time => parse_time_unit(s).map(AnyUnit::Time),
        PhysicalQuantity::Frequency => parse_frequency_unit(s).map(AnyUnit::Frequency),
        PhysicalQuantity::Mass => parse_mass_unit(s).map(AnyUnit::Mass),
        PhysicalQuantity::Density => parse_density_unit(s).map(AnyUnit::Density),
        PhysicalQuantity::SpecificVolume => {
            parse_specific_volume_unit(s).map(AnyUnit::SpecificVolume)
        }
        PhysicalQuantity::Speed => parse_speed_unit(s).map(AnyUnit::Speed),
        PhysicalQuantity::Acceleration => parse_acceleration_unit(s).map(AnyUnit::Acceleration),
        PhysicalQuantity::Momentum => parse_momentum_unit(s).map(AnyUnit::Momentum),
        PhysicalQuantity::Force => parse_force_unit(s).map(AnyUnit::Force),
        PhysicalQuantity::Pressure => parse_pressure_unit(s).map(AnyUnit::Pressure),
        PhysicalQuantity::Energy => parse_energy_unit(s).map(AnyUnit::Energy),
        PhysicalQuantity::Power => parse_power_unit(s).map(AnyUnit::Power),
        PhysicalQuantity::ElectricCurrent => {
            parse_electric_current_unit(s).map(AnyUnit::ElectricCurrent)
        }
        PhysicalQuantity::ElectricCharge => {
            parse_electric_charge_unit(s).map(AnyUnit::ElectricCharge)
        }
        PhysicalQuantity::Voltage => parse_voltage_unit(s).map(AnyUnit::Voltage),
        PhysicalQuantity::ElectricResistance => {
            parse_resistance_unit(s).map(AnyUnit::ElectricResistance)
        }
        PhysicalQuantity::Temperature => parse_temperature_unit(s).map(AnyUnit::Temperature),
    }
}

fn parse_length_unit(s: &str) -> Result<LengthUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m" | "meter" => Ok(LengthUnit::Meter),
        "cm" | "centimeter" => Ok(LengthUnit::Centimeter),
        "mm" | "millimeter" => Ok(LengthUnit::Millimeter),
        "km" | "kilometer" => Ok(LengthUnit::Kilometer),
        "in" | "inch" | "\"" => Ok(LengthUnit::Inch),
        "ft" | "foot" | "feet" => Ok(LengthUnit::Foot),
        "yd" | "yard" => Ok(LengthUnit::Yard),
        "mi" | "mile" => Ok(LengthUnit::Mile),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_area_unit(s: &str) -> Result<AreaUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m2" | "m^2" => Ok(AreaUnit::SquareMeter),
        "cm2" | "cm^2" => Ok(AreaUnit::SquareCentimeter),
        "km2" | "km^2" => Ok(AreaUnit::SquareKilometer),
        "in2" | "in^2" => Ok(AreaUnit::SquareInch),
        "ft2" | "ft^2" => Ok(AreaUnit::SquareFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_volume_unit(s: &str) -> Result<VolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3" | "m^3" => Ok(VolumeUnit::CubicMeter),
        "l" | "liter" => Ok(VolumeUnit::Liter),
        "ml" | "milliliter" => Ok(VolumeUnit::Milliliter),
        "ft3" | "ft^3" => Ok(VolumeUnit::CubicFoot),
        "in3" | "in^3" => Ok(VolumeUnit::CubicInch),
        "gal" | "gallon" => Ok(VolumeUnit::UsGallon),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_time_unit(s: &str) -> Result<TimeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "s" | "sec" | "second" => Ok(TimeUnit::Second),
        "ms" | "millisecond" => Ok(TimeUnit::Millisecond),
        "min" | "minute" => Ok(TimeUnit::Minute),
        "h" | "hr" | "hour" => Ok(TimeUnit::Hour),
        "d" | "day" => Ok(TimeUnit::Day),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_frequency_unit(s: &str) -> Result<FrequencyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "hz" | "hertz" => Ok(FrequencyUnit::Hertz),
        "khz" => Ok(FrequencyUnit::Kilohertz),
        "mhz" => Ok(FrequencyUnit::Megahertz),
        "ghz" => Ok(FrequencyUnit::Gigahertz),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" | "kilogram" => Ok(MassUnit::Kilogram),
        "g" | "gram" => Ok(MassUnit::Gram),
        "t" | "ton" | "tonne" => Ok(MassUnit::Tonne),
        "lb" | "pound" => Ok(MassUnit::Pound),
        "oz" | "ounce" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_density_unit(s: &str) -> Result<DensityUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg/m3" | "kg/m^3" => Ok(DensityUnit::KilogramPerCubicMeter),
        "g/cm3" | "g/cm^3" => Ok(DensityUnit::GramPerCubicCentimeter),
        "lb/ft3" | "lb/ft^3" => Ok(DensityUnit::PoundPerCubicFoot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_volume_unit(s: &str) -> Result<SpecificVolumeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m3/kg" | "m^3/kg" => Ok(SpecificVolumeUnit::CubicMeterPerKilogram),
        "l/kg" => Ok(SpecificVolumeUnit::LiterPerKilogram),
        "ft3/lb" | "ft^3/lb" => Ok(SpecificVolumeUnit::CubicFootPerPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_speed_unit(s: &str) -> Result<SpeedUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s" | "mps" => Ok(SpeedUnit::MeterPerSecond),
        "km/h" | "kmh" | "kph" => Ok(SpeedUnit::KilometerPerHour),
        "ft/s" | "fps" => Ok(SpeedUnit::FootPerSecond),
        "mph" | "mi/h" => Ok(SpeedUnit::MilePerHour),
        "kn" | "knot" | "kt" => Ok(SpeedUnit::Knot),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_acceleration_unit(s: &str) -> Result<AccelerationUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "m/s2" | "m/s^2" => Ok(AccelerationUnit::MeterPerSquareSecond),
        "ft/s2" | "ft/s^2" => Ok(AccelerationUnit::FootPerSquareSecond),
        "g0" | "g" => Ok(AccelerationUnit::StandardGravity),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_momentum_unit(s: &str) -> Result<MomentumUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg·m/s" | "kg*m/s" | "kgm/s" => Ok(MomentumUnit::KilogramMeterPerSecond),
        "lb·ft/s" | "lb*ft/s" | "lbft/s" => Ok(MomentumUnit::PoundFootPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_force_unit(s: &str) -> Result<ForceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "n" | "newton" => Ok(ForceUnit::Newton),
        "kn" | "kilonewton" => Ok(ForceUnit::Kilonewton),
        "dyn" | "dyne" => Ok(ForceUnit::Dyne),
        "kgf" => Ok(ForceUnit::KilogramForce),
        "lbf" => Ok(ForceUnit::PoundForce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "mpa" | "megapascal" => Ok(PressureUnit::MegaPascal),
        "bar" => Ok(PressureUnit::Bar),
        "mbar" | "millibar" => Ok(PressureUnit::MilliBar),
        "atm" => Ok(PressureUnit::Atm),
        "psi" => Ok(PressureUnit::Psi),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "j" | "joule" => Ok(EnergyUnit::Joule),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "mj" | "megajoule" => Ok(EnergyUnit::Megajoule),
        "cal" | "calorie" => Ok(EnergyUnit::Calorie),
        "kcal" | "kilocalorie" => Ok(EnergyUnit::KiloCalorie),
        "wh" => Ok(EnergyUnit::WattHour),
        "kwh" => Ok(EnergyUnit::KilowattHour),
        "btu" => Ok(EnergyUnit::Btu),
        "ft·lb" | "ft*lb" | "ftlb" => Ok(EnergyUnit::FootPound),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_power_unit(s: &str) -> Result<PowerUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "w" | "watt" => Ok(PowerUnit::Watt),
        "kw" | "kilowatt" => Ok(PowerUnit::Kilowatt),
        "mw" | "megawatt" => Ok(PowerUnit::Megawatt),
        "hp" | "horsepower" => Ok(PowerUnit::Horsepower),
        "btu/h" | "btuh" => Ok(PowerUnit::BtuPerHour),
        "ft·lb/s" | "ft*lb/s" | "ftlb/s" => Ok(PowerUnit::FootPoundPerSecond),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_electric_current_unit(s: &str) -> Result<ElectricCurrentUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "a" | "amp" | "ampere" => Ok(ElectricCurrentUnit::Ampere),
        "ma" | "milliampere" => Ok(ElectricCurrentUnit::Milliampere),
        "µa" | "ua" | "microampere" => Ok(ElectricCurrentUnit::Microampere),
        "ka" | "kiloampere" => Ok(ElectricCurrentUnit::Kiloampere),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_electric_charge_unit(s: &str) -> Result<ElectricChargeUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "c" | "coulomb" => Ok(ElectricChargeUnit::Coulomb),
        "mc" | "millicoulomb" => Ok(ElectricChargeUnit::Millicoulomb),
        "ah" => Ok(ElectricChargeUnit::AmpereHour),
        "mah" => Ok(ElectricChargeUnit::MilliampereHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_voltage_unit(s: &str) -> Result<VoltageUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "v" | "volt" => Ok(VoltageUnit::Volt),
        "mv" | "millivolt" => Ok(VoltageUnit::Millivolt),
        "kv" | "kilovolt" => Ok(VoltageUnit::Kilovolt),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_resistance_unit(s: &str) -> Result<ElectricResistanceUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "ω" | "ohm" => Ok(ElectricResistanceUnit::Ohm),
        "kω" | "kohm" => Ok(ElectricResistanceUnit::Kiloohm),
        "mω" | "mohm" | "megaohm" => Ok(ElectricResistanceUnit::Megaohm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
