use serde::{Deserialize, Serialize};

/// 가속도 단위. 내부 기준은 m/s²이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccelerationUnit {
    MeterPerSquareSecond,
    FootPerSquareSecond,
    StandardGravity,
}

impl AccelerationUnit {
    pub const ALL: [AccelerationUnit; 3] = [
        AccelerationUnit::MeterPerSquareSecond,
        AccelerationUnit::FootPerSquareSecond,
        AccelerationUnit::StandardGravity,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            AccelerationUnit::MeterPerSquareSecond => "m/s2",
            AccelerationUnit::FootPerSquareSecond => "ft/s2",
            AccelerationUnit::StandardGravity => "g0",
        }
    }
}

fn to_mps2(value: f64, unit: AccelerationUnit) -> f64 {
    match unit {
        AccelerationUnit::MeterPerSquareSecond => value,
        AccelerationUnit::FootPerSquareSecond => value * 0.3048,
        AccelerationUnit::StandardGravity => value * 9.80665,
    }
}

fn from_mps2(value: f64, unit: AccelerationUnit) -> f64 {
    match unit {
        AccelerationUnit::MeterPerSquareSecond => value,
        AccelerationUnit::FootPerSquareSecond => value / 0.3048,
        AccelerationUnit::StandardGravity => value / 9.80665,
    }
}

/// 가속도를 변환한다.
pub fn convert_acceleration(value: f64, from: AccelerationUnit, to: AccelerationUnit) -> f64 {
    let base = to_mps2(value, from);
    from_mps2(base, to)
}
