//! 물리량별 변환기 목록 모음.
//!
//! 각 모듈은 해당 물리량에서 출발할 수 있는 변환을 열거한 목록을 만든다.
//! UI는 `converters_for`로 목록을 얻어 "변환 대상" 선택지를 채운다.

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

use crate::converter::QuantityConverter;
use crate::quantity::PhysicalQuantity;

/// 주어진 물리량에서 출발하는 변환기 목록을 반환한다.
pub fn converters_for(quantity: PhysicalQuantity) -> Vec<QuantityConverter> {
    match quantity {
        PhysicalQuantity::Length => length::converters(),
        PhysicalQuantity::Area => area::converters(),
        PhysicalQuantity::Volume => volume::converters(),
        PhysicalQuantity::Time => time::converters(),
        PhysicalQuantity::Frequency => frequency::converters(),
        PhysicalQuantity::Mass => mass::converters(),
        PhysicalQuantity::Density => density::converters(),
        PhysicalQuantity::SpecificVolume => specific_volume::converters(),
        PhysicalQuantity::Speed => speed::converters(),
        PhysicalQuantity::Acceleration => acceleration::converters(),
        PhysicalQuantity::Momentum => momentum::converters(),
        PhysicalQuantity::Force => force::converters(),
        PhysicalQuantity::Pressure => pressure::converters(),
        PhysicalQuantity::Energy => energy::converters(),
        PhysicalQuantity::Power => power::converters(),
        PhysicalQuantity::ElectricCurrent => electric_current::converters(),
        PhysicalQuantity::ElectricCharge => electric_charge::converters(),
        PhysicalQuantity::Voltage => voltage::converters(),
        PhysicalQuantity::ElectricResistance => resistance::converters(),
        PhysicalQuantity::Temperature => temperature::converters(),
    }
}
