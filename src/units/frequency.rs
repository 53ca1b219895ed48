use serde::{Deserialize, Serialize};

/// 주파수 단위. 내부 기준은 헤르츠(Hz)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FrequencyUnit {
    Hertz,
    Kilohertz,
    Megahertz,
    Gigahertz,
}

impl FrequencyUnit {
    pub const ALL: [FrequencyUnit; 4] = [
        FrequencyUnit::Hertz,
        FrequencyUnit::Kilohertz,
        FrequencyUnit::Megahertz,
        FrequencyUnit::Gigahertz,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            FrequencyUnit::Hertz => "Hz",
            FrequencyUnit::Kilohertz => "kHz",
            FrequencyUnit::Megahertz => "MHz",
            FrequencyUnit::Gigahertz => "GHz",
        }
    }
}

fn to_hertz(value: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value,
        FrequencyUnit::Kilohertz => value * 1e3,
        FrequencyUnit::Megahertz => value * 1e6,
        FrequencyUnit::Gigahertz => value * 1e9,
    }
}

fn from_hertz(value: f64, unit: FrequencyUnit) -> f64 {
    match unit {
        FrequencyUnit::Hertz => value,
        FrequencyUnit::Kilohertz => value / 1e3,
        FrequencyUnit::Megahertz => value / 1e6,
        FrequencyUnit::Gigahertz => value / 1e9,
    }
}

/// 주파수를 변환한다.
pub fn convert_frequency(value: f64, from: FrequencyUnit, to: FrequencyUnit) -> f64 {
    let hz = to_hertz(value, from);
    from_hertz(hz, to)
}
