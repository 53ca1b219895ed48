use serde::{Deserialize, Serialize};

/// 밀도 단위. 내부 기준은 kg/m³이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DensityUnit {
    KilogramPerCubicMeter,
    GramPerCubicCentimeter,
    PoundPerCubicFoot,
}

impl DensityUnit {
    pub const ALL: [DensityUnit; 3] = [
        DensityUnit::KilogramPerCubicMeter,
        DensityUnit::GramPerCubicCentimeter,
        DensityUnit::PoundPerCubicFoot,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            DensityUnit::KilogramPerCubicMeter => "kg/m3",
            DensityUnit::GramPerCubicCentimeter => "g/cm3",
            DensityUnit::PoundPerCubicFoot => "lb/ft3",
        }
    }
}

fn to_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value * 1000.0,
        // 0.45359237 kg / 0.028316846592 m3
        DensityUnit::PoundPerCubicFoot => value * 16.018463373960142,
    }
}

fn from_kg_per_m3(value: f64, unit: DensityUnit) -> f64 {
    match unit {
        DensityUnit::KilogramPerCubicMeter => value,
        DensityUnit::GramPerCubicCentimeter => value / 1000.0,
        DensityUnit::PoundPerCubicFoot => value / 16.018463373960142,
    }
}

/// 밀도를 변환한다.
pub fn convert_density(value: f64, from: DensityUnit, to: DensityUnit) -> f64 {
    let base = to_kg_per_m3(value, from);
    from_kg_per_m3(base, to)
}
