use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 파스칼(Pa)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    KiloPascal,
    MegaPascal,
    Bar,
    MilliBar,
    Atm,
    Psi,
    MmHg,
}

impl PressureUnit {
    pub const ALL: [PressureUnit; 8] = [
        PressureUnit::Pascal,
        PressureUnit::KiloPascal,
        PressureUnit::MegaPascal,
        PressureUnit::Bar,
        PressureUnit::MilliBar,
        PressureUnit::Atm,
        PressureUnit::Psi,
        PressureUnit::MmHg,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::MegaPascal => "MPa",
            PressureUnit::Bar => "bar",
            PressureUnit::MilliBar => "mbar",
            PressureUnit::Atm => "atm",
            PressureUnit::Psi => "psi",
            PressureUnit::MmHg => "mmHg",
        }
    }
}

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1e3,
        PressureUnit::MegaPascal => value * 1e6,
        PressureUnit::Bar => value * 1e5,
        PressureUnit::MilliBar => value * 100.0,
        PressureUnit::Atm => value * 101_325.0,
        PressureUnit::Psi => value * 6894.757293168362,
        PressureUnit::MmHg => value * 133.322387415,
    }
}

fn from_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value / 1e3,
        PressureUnit::MegaPascal => value / 1e6,
        PressureUnit::Bar => value / 1e5,
        PressureUnit::MilliBar => value / 100.0,
        PressureUnit::Atm => value / 101_325.0,
        PressureUnit::Psi => value / 6894.757293168362,
        PressureUnit::MmHg => value / 133.322387415,
    }
}

/// 압력을 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
