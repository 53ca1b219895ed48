use serde::{Deserialize, Serialize};

/// 시간 단위. 내부 기준은 초(s)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeUnit {
    Second,
    Millisecond,
    Minute,
    Hour,
    Day,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 5] = [
        TimeUnit::Second,
        TimeUnit::Millisecond,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TimeUnit::Second => "s",
            TimeUnit::Millisecond => "ms",
            TimeUnit::Minute => "min",
            TimeUnit::Hour => "h",
            TimeUnit::Day => "d",
        }
    }
}

fn to_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Millisecond => value * 0.001,
        TimeUnit::Minute => value * 60.0,
        TimeUnit::Hour => value * 3600.0,
        TimeUnit::Day => value * 86400.0,
    }
}

fn from_second(value: f64, unit: TimeUnit) -> f64 {
    match unit {
        TimeUnit::Second => value,
        TimeUnit::Millisecond => value / 0.001,
        TimeUnit::Minute => value / 60.0,
        TimeUnit::Hour => value / 3600.0,
        TimeUnit::Day => value / 86400.0,
    }
}

/// 시간을 변환한다.
pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
    let s = to_second(value, from);
    from_second(s, to)
}
