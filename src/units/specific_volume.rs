use serde::{Deserialize, Serialize};

/// 비체적 단위. 내부 기준은 m³/kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificVolumeUnit {
    CubicMeterPerKilogram,
    LiterPerKilogram,
    CubicFootPerPound,
}

impl SpecificVolumeUnit {
    pub const ALL: [SpecificVolumeUnit; 3] = [
        SpecificVolumeUnit::CubicMeterPerKilogram,
        SpecificVolumeUnit::LiterPerKilogram,
        SpecificVolumeUnit::CubicFootPerPound,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            SpecificVolumeUnit::CubicMeterPerKilogram => "m3/kg",
            SpecificVolumeUnit::LiterPerKilogram => "L/kg",
            SpecificVolumeUnit::CubicFootPerPound => "ft3/lb",
        }
    }
}

fn to_m3_per_kg(value: f64, unit: SpecificVolumeUnit) -> f64 {
    match unit {
        SpecificVolumeUnit::CubicMeterPerKilogram => value,
        SpecificVolumeUnit::LiterPerKilogram => value * 0.001,
        // 0.028316846592 m3 / 0.45359237 kg
        SpecificVolumeUnit::CubicFootPerPound => value * 0.06242796057614462,
    }
}

fn from_m3_per_kg(value: f64, unit: SpecificVolumeUnit) -> f64 {
    match unit {
        SpecificVolumeUnit::CubicMeterPerKilogram => value,
        SpecificVolumeUnit::LiterPerKilogram => value / 0.001,
        SpecificVolumeUnit::CubicFootPerPound => value / 0.06242796057614462,
    }
}

/// 비체적을 변환한다.
pub fn convert_specific_volume(
    value: f64,
    from: SpecificVolumeUnit,
    to: SpecificVolumeUnit,
) -> f64 {
    let base = to_m3_per_kg(value, from);
    from_m3_per_kg(base, to)
}
