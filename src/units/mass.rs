use serde::{Deserialize, Serialize};

/// 질량 단위. 내부 기준은 킬로그램(kg)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MassUnit {
    Kilogram,
    Gram,
    Tonne,
    Pound,
    Ounce,
}

impl MassUnit {
    pub const ALL: [MassUnit; 5] = [
        MassUnit::Kilogram,
        MassUnit::Gram,
        MassUnit::Tonne,
        MassUnit::Pound,
        MassUnit::Ounce,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            MassUnit::Kilogram => "kg",
            MassUnit::Gram => "g",
            MassUnit::Tonne => "t",
            MassUnit::Pound => "lb",
            MassUnit::Ounce => "oz",
        }
    }
}

fn to_kilogram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value * 0.001,
        MassUnit::Tonne => value * 1000.0,
        MassUnit::Pound => value * 0.45359237,
        MassUnit::Ounce => value * 0.028349523125,
    }
}

fn from_kilogram(value: f64, unit: MassUnit) -> f64 {
    match unit {
        MassUnit::Kilogram => value,
        MassUnit::Gram => value / 0.001,
        MassUnit::Tonne => value / 1000.0,
        MassUnit::Pound => value / 0.45359237,
        MassUnit::Ounce => value / 0.028349523125,
    }
}

/// 질량을 변환한다.
pub fn convert_mass(value: f64, from: MassUnit, to: MassUnit) -> f64 {
    let kg = to_kilogram(value, from);
    from_kilogram(kg, to)
}
