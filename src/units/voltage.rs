use serde::{Deserialize, Serialize};

/// 전압 단위. 내부 기준은 볼트(V)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VoltageUnit {
    Volt,
    Millivolt,
    Kilovolt,
}

impl VoltageUnit {
    pub const ALL: [VoltageUnit; 3] = [
        VoltageUnit::Volt,
        VoltageUnit::Millivolt,
        VoltageUnit::Kilovolt,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            VoltageUnit::Volt => "V",
            VoltageUnit::Millivolt => "mV",
            VoltageUnit::Kilovolt => "kV",
        }
    }
}

fn to_volt(value: f64, unit: VoltageUnit) -> f64 {
    match unit {
        VoltageUnit::Volt => value,
        VoltageUnit::Millivolt => value * 1e-3,
        VoltageUnit::Kilovolt => value * 1e3,
    }
}

fn from_volt(value: f64, unit: VoltageUnit) -> f64 {
    match unit {
        VoltageUnit::Volt => value,
        VoltageUnit::Millivolt => value / 1e-3,
        VoltageUnit::Kilovolt => value / 1e3,
    }
}

/// 전압을 변환한다.
pub fn convert_voltage(value: f64, from: VoltageUnit, to: VoltageUnit) -> f64 {
    let v = to_volt(value, from);
    from_volt(v, to)
}
