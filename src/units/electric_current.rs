use serde::{Deserialize, Serialize};

/// 전류 단위. 내부 기준은 암페어(A)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricCurrentUnit {
    Ampere,
    Milliampere,
    Microampere,
    Kiloampere,
}

impl ElectricCurrentUnit {
    pub const ALL: [ElectricCurrentUnit; 4] = [
        ElectricCurrentUnit::Ampere,
        ElectricCurrentUnit::Milliampere,
        ElectricCurrentUnit::Microampere,
        ElectricCurrentUnit::Kiloampere,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ElectricCurrentUnit::Ampere => "A",
            ElectricCurrentUnit::Milliampere => "mA",
            ElectricCurrentUnit::Microampere => "µA",
            ElectricCurrentUnit::Kiloampere => "kA",
        }
    }
}

fn to_ampere(value: f64, unit: ElectricCurrentUnit) -> f64 {
    match unit {
        ElectricCurrentUnit::Ampere => value,
        ElectricCurrentUnit::Milliampere => value * 1e-3,
        ElectricCurrentUnit::Microampere => value * 1e-6,
        ElectricCurrentUnit::Kiloampere => value * 1e3,
    }
}

fn from_ampere(value: f64, unit: ElectricCurrentUnit) -> f64 {
    match unit {
        ElectricCurrentUnit::Ampere => value,
        ElectricCurrentUnit::Milliampere => value / 1e-3,
        ElectricCurrentUnit::Microampere => value / 1e-6,
        ElectricCurrentUnit::Kiloampere => value / 1e3,
    }
}

/// 전류를 변환한다.
pub fn convert_electric_current(
    value: f64,
    from: ElectricCurrentUnit,
    to: ElectricCurrentUnit,
) -> f64 {
    let a = to_ampere(value, from);
    from_ampere(a, to)
}
