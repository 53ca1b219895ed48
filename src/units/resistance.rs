use serde::{Deserialize, Serialize};

/// 전기 저항 단위. 내부 기준은 옴(Ω)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricResistanceUnit {
    Ohm,
    Kiloohm,
    Megaohm,
}

impl ElectricResistanceUnit {
    pub const ALL: [ElectricResistanceUnit; 3] = [
        ElectricResistanceUnit::Ohm,
        ElectricResistanceUnit::Kiloohm,
        ElectricResistanceUnit::Megaohm,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ElectricResistanceUnit::Ohm => "Ω",
            ElectricResistanceUnit::Kiloohm => "kΩ",
            ElectricResistanceUnit::Megaohm => "MΩ",
        }
    }
}

fn to_ohm(value: f64, unit: ElectricResistanceUnit) -> f64 {
    match unit {
        ElectricResistanceUnit::Ohm => value,
        ElectricResistanceUnit::Kiloohm => value * 1e3,
        ElectricResistanceUnit::Megaohm => value * 1e6,
    }
}

fn from_ohm(value: f64, unit: ElectricResistanceUnit) -> f64 {
    match unit {
        ElectricResistanceUnit::Ohm => value,
        ElectricResistanceUnit::Kiloohm => value / 1e3,
        ElectricResistanceUnit::Megaohm => value / 1e6,
    }
}

/// 전기 저항을 변환한다.
pub fn convert_resistance(
    value: f64,
    from: ElectricResistanceUnit,
    to: ElectricResistanceUnit,
) -> f64 {
    let ohm = to_ohm(value, from);
    from_ohm(ohm, to)
}
