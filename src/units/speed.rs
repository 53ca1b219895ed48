use serde::{Deserialize, Serialize};

/// 속도 단위. 내부 기준은 m/s이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpeedUnit {
    MeterPerSecond,
    KilometerPerHour,
    FootPerSecond,
    MilePerHour,
    Knot,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 5] = [
        SpeedUnit::MeterPerSecond,
        SpeedUnit::KilometerPerHour,
        SpeedUnit::FootPerSecond,
        SpeedUnit::MilePerHour,
        SpeedUnit::Knot,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            SpeedUnit::MeterPerSecond => "m/s",
            SpeedUnit::KilometerPerHour => "km/h",
            SpeedUnit::FootPerSecond => "ft/s",
            SpeedUnit::MilePerHour => "mph",
            SpeedUnit::Knot => "kn",
        }
    }
}

fn to_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value,
        SpeedUnit::KilometerPerHour => value / 3.6,
        SpeedUnit::FootPerSecond => value * 0.3048,
        SpeedUnit::MilePerHour => value * 0.44704,
        SpeedUnit::Knot => value * (1852.0 / 3600.0),
    }
}

fn from_mps(value: f64, unit: SpeedUnit) -> f64 {
    match unit {
        SpeedUnit::MeterPerSecond => value,
        SpeedUnit::KilometerPerHour => value * 3.6,
        SpeedUnit::FootPerSecond => value / 0.3048,
        SpeedUnit::MilePerHour => value / 0.44704,
        SpeedUnit::Knot => value / (1852.0 / 3600.0),
    }
}

/// 속도를 변환한다.
pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
    let base = to_mps(value, from);
    from_mps(base, to)
}
