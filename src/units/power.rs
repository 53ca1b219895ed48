use serde::{Deserialize, Serialize};

/// 동력 단위. 내부 기준은 와트(W)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerUnit {
    Watt,
    Kilowatt,
    Megawatt,
    Horsepower,
    BtuPerHour,
    FootPoundPerSecond,
}

impl PowerUnit {
    pub const ALL: [PowerUnit; 6] = [
        PowerUnit::Watt,
        PowerUnit::Kilowatt,
        PowerUnit::Megawatt,
        PowerUnit::Horsepower,
        PowerUnit::BtuPerHour,
        PowerUnit::FootPoundPerSecond,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PowerUnit::Watt => "W",
            PowerUnit::Kilowatt => "kW",
            PowerUnit::Megawatt => "MW",
            PowerUnit::Horsepower => "hp",
            PowerUnit::BtuPerHour => "Btu/h",
            PowerUnit::FootPoundPerSecond => "ft·lb/s",
        }
    }
}

fn to_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value * 1000.0,
        PowerUnit::Megawatt => value * 1e6,
        // 기계 마력 (550 ft·lbf/s)
        PowerUnit::Horsepower => value * 745.6998715822702,
        PowerUnit::BtuPerHour => value * (1055.06 / 3600.0),
        PowerUnit::FootPoundPerSecond => value * 1.3558179483314004,
    }
}

fn from_watt(value: f64, unit: PowerUnit) -> f64 {
    match unit {
        PowerUnit::Watt => value,
        PowerUnit::Kilowatt => value / 1000.0,
        PowerUnit::Megawatt => value / 1e6,
        PowerUnit::Horsepower => value / 745.6998715822702,
        PowerUnit::BtuPerHour => value / (1055.06 / 3600.0),
        PowerUnit::FootPoundPerSecond => value / 1.3558179483314004,
    }
}

/// 동력을 변환한다.
pub fn convert_power(value: f64, from: PowerUnit, to: PowerUnit) -> f64 {
    let w = to_watt(value, from);
    from_watt(w, to)
}
