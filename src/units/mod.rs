//! 단위 정의 및 변환 모듈 모음.

pub mod acceleration;
pub mod area;
pub mod density;
pub mod electric_charge;
pub mod electric_current;
pub mod energy;
pub mod force;
pub mod frequency;
pub mod length;
pub mod mass;
pub mod momentum;
pub mod power;
pub mod pressure;
pub mod resistance;
pub mod specific_volume;
pub mod speed;
pub mod temperature;
pub mod time;
pub mod voltage;
pub mod volume;

pub use acceleration::{convert_acceleration, AccelerationUnit};
pub use area::{convert_area, AreaUnit};
pub use density::{convert_density, DensityUnit};
pub use electric_charge::{convert_electric_charge, ElectricChargeUnit};
pub use electric_current::{convert_electric_current, ElectricCurrentUnit};
pub use energy::{convert_energy, EnergyUnit};
pub use force::{convert_force, ForceUnit};
pub use frequency::{convert_frequency, FrequencyUnit};
pub use length::{convert_length, LengthUnit};
pub use mass::{convert_mass, MassUnit};
pub use momentum::{convert_momentum, MomentumUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use resistance::{convert_resistance, ElectricResistanceUnit};
pub use specific_volume::{convert_specific_volume, SpecificVolumeUnit};
pub use speed::{convert_speed, SpeedUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
pub use time::{convert_time, TimeUnit};
pub use voltage::{convert_voltage, VoltageUnit};
pub use volume::{convert_volume, VolumeUnit};
