use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::quantity::{AnyUnit, PhysicalQuantity};
use crate::units::*;

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// SI 기준. 내부 계산 기본값.
    SI,
    /// 영국식/야드파운드법
    Imperial,
}

/// 각 물리량별 기본 단위 설정을 담는다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultUnits {
    pub length: LengthUnit,
    pub area: AreaUnit,
    pub volume: VolumeUnit,
    pub time: TimeUnit,
    pub frequency: FrequencyUnit,
    pub mass: MassUnit,
    pub density: DensityUnit,
    pub specific_volume: SpecificVolumeUnit,
    pub speed: SpeedUnit,
    pub acceleration: AccelerationUnit,
    pub momentum: MomentumUnit,
    pub force: ForceUnit,
    pub pressure: PressureUnit,
    pub energy: EnergyUnit,
    pub power: PowerUnit,
    pub electric_current: ElectricCurrentUnit,
    pub electric_charge: ElectricChargeUnit,
    pub voltage: VoltageUnit,
    pub resistance: ElectricResistanceUnit,
    pub temperature: TemperatureUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::si()
    }
}

impl DefaultUnits {
    fn si() -> Self {
        Self {
            length: LengthUnit::Meter,
            area: AreaUnit::SquareMeter,
            volume: VolumeUnit::CubicMeter,
            time: TimeUnit::Second,
            frequency: FrequencyUnit::Hertz,
            mass: MassUnit::Kilogram,
            density: DensityUnit::KilogramPerCubicMeter,
            specific_volume: SpecificVolumeUnit::CubicMeterPerKilogram,
            speed: SpeedUnit::MeterPerSecond,
            acceleration: AccelerationUnit::MeterPerSquareSecond,
            momentum: MomentumUnit::KilogramMeterPerSecond,
            force: ForceUnit::Newton,
            pressure: PressureUnit::Pascal,
            energy: EnergyUnit::Joule,
            power: PowerUnit::Watt,
            electric_current: ElectricCurrentUnit::Ampere,
            electric_charge: ElectricChargeUnit::Coulomb,
            voltage: VoltageUnit::Volt,
            resistance: ElectricResistanceUnit::Ohm,
            temperature: TemperatureUnit::Celsius,
        }
    }

    fn imperial() -> Self {
        Self {
            length: LengthUnit::Foot,
            area: AreaUnit::SquareFoot,
            volume: VolumeUnit::CubicFoot,
            time: TimeUnit::Second,
            frequency: FrequencyUnit::Hertz,
            mass: MassUnit::Pound,
            density: DensityUnit::PoundPerCubicFoot,
            specific_volume: SpecificVolumeUnit::CubicFootPerPound,
            speed: SpeedUnit::FootPerSecond,
            acceleration: AccelerationUnit::FootPerSquareSecond,
            momentum: MomentumUnit::PoundFootPerSecond,
            force: ForceUnit::PoundForce,
            pressure: PressureUnit::Psi,
            energy: EnergyUnit::FootPound,
            power: PowerUnit::FootPoundPerSecond,
            electric_current: ElectricCurrentUnit::Ampere,
            electric_charge: ElectricChargeUnit::Coulomb,
            voltage: VoltageUnit::Volt,
            resistance: ElectricResistanceUnit::Ohm,
            temperature: TemperatureUnit::Fahrenheit,
        }
    }

    /// 프리셋에 해당하는 기본 단위 세트를 만든다.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::SI => Self::si(),
            UnitSystem::Imperial => Self::imperial(),
        }
    }

    /// 물리량에 대한 기본 단위를 돌려준다.
    pub fn unit_for(&self, quantity: PhysicalQuantity) -> AnyUnit {
        match quantity {
            PhysicalQuantity::Length => AnyUnit::Length(self.length),
            PhysicalQuantity::Area => AnyUnit::Area(self.area),
            PhysicalQuantity::Volume => AnyUnit::Volume(self.volume),
            PhysicalQuantity::Time => AnyUnit::Time(self.time),
            PhysicalQuantity::Frequency => AnyUnit::Frequency(self.frequency),
            PhysicalQuantity::Mass => AnyUnit::Mass(self.mass),
            PhysicalQuantity::Density => AnyUnit::Density(self.density),
            PhysicalQuantity::SpecificVolume => AnyUnit::SpecificVolume(self.specific_volume),
            PhysicalQuantity::Speed => AnyUnit::Speed(self.speed),
            PhysicalQuantity::Acceleration => AnyUnit::Acceleration(self.acceleration),
            PhysicalQuantity::Momentum => AnyUnit::Momentum(self.momentum),
            PhysicalQuantity::Force => AnyUnit::Force(self.force),
            PhysicalQuantity::Pressure => AnyUnit::Pressure(self.pressure),
            PhysicalQuantity::Energy => AnyUnit::Energy(self.energy),
            PhysicalQuantity::Power => AnyUnit::Power(self.power),
            PhysicalQuantity::ElectricCurrent => {
                AnyUnit::ElectricCurrent(self.electric_current)
            }
            PhysicalQuantity::ElectricCharge => AnyUnit::ElectricCharge(self.electric_charge),
            PhysicalQuantity::Voltage => AnyUnit::Voltage(self.voltage),
            PhysicalQuantity::ElectricResistance => {
                AnyUnit::ElectricResistance(self.resistance)
            }
            PhysicalQuantity::Temperature => AnyUnit::Temperature(self.temperature),
        }
    }
}

fn default_window_alpha() -> f32 {
    1.0
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// UI 언어 코드(ko/en/auto). "auto"는 시스템 로케일을 따른다.
    #[serde(default)]
    pub language: String,
    /// 언어팩 TOML을 찾을 디렉터리. 비우면 locales/ 및 내장팩 사용.
    #[serde(default)]
    pub language_pack_dir: Option<String>,
    /// GUI 창 불투명도(0.2~1.0).
    #[serde(default = "default_window_alpha")]
    pub window_alpha: f32,
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "auto".to_string(),
            language_pack_dir: None,
            window_alpha: 1.0,
            unit_system: UnitSystem::SI,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    let path = Path::new("config.toml");
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write("config.toml", content)?;
    Ok(())
}

impl Config {
    /// 설정을 config.toml에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        save_config(self)
    }

    /// 단위 시스템 프리셋을 바꾸고 기본 단위 세트를 함께 갱신한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}
