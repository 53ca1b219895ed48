use serde::{Deserialize, Serialize};

/// 운동량 단위. 내부 기준은 kg·m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MomentumUnit {
    KilogramMeterPerSecond,
    PoundFootPerSecond,
}

impl MomentumUnit {
    pub const ALL: [MomentumUnit; 2] = [
        MomentumUnit::KilogramMeterPerSecond,
        MomentumUnit::PoundFootPerSecond,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            MomentumUnit::KilogramMeterPerSecond => "kg·m/s",
            MomentumUnit::PoundFootPerSecond => "lb·ft/s",
        }
    }
}

fn to_kg_mps(value: f64, unit: MomentumUnit) -> f64 {
    match unit {
        MomentumUnit::KilogramMeterPerSecond => value,
        // 0.45359237 kg * 0.3048 m
        MomentumUnit::PoundFootPerSecond => value * 0.138254954376,
    }
}

fn from_kg_mps(value: f64, unit: MomentumUnit) -> f64 {
    match unit {
        MomentumUnit::KilogramMeterPerSecond => value,
        MomentumUnit::PoundFootPerSecond => value / 0.138254954376,
    }
}

/// 운동량을 변환한다.
pub fn convert_momentum(value: f64, from: MomentumUnit, to: MomentumUnit) -> f64 {
    let base = to_kg_mps(value, from);
    from_kg_mps(base, to)
}
