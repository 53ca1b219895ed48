use serde::{Deserialize, Serialize};

/// 힘 단위. 내부 기준은 뉴턴(N)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ForceUnit {
    Newton,
    Kilonewton,
    Dyne,
    KilogramForce,
    PoundForce,
}

impl ForceUnit {
    pub const ALL: [ForceUnit; 5] = [
        ForceUnit::Newton,
        ForceUnit::Kilonewton,
        ForceUnit::Dyne,
        ForceUnit::KilogramForce,
        ForceUnit::PoundForce,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ForceUnit::Newton => "N",
            ForceUnit::Kilonewton => "kN",
            ForceUnit::Dyne => "dyn",
            ForceUnit::KilogramForce => "kgf",
            ForceUnit::PoundForce => "lbf",
        }
    }
}

fn to_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value,
        ForceUnit::Kilonewton => value * 1000.0,
        ForceUnit::Dyne => value * 1e-5,
        ForceUnit::KilogramForce => value * 9.80665,
        ForceUnit::PoundForce => value * 4.4482216152605,
    }
}

fn from_newton(value: f64, unit: ForceUnit) -> f64 {
    match unit {
        ForceUnit::Newton => value,
        ForceUnit::Kilonewton => value / 1000.0,
        ForceUnit::Dyne => value / 1e-5,
        ForceUnit::KilogramForce => value / 9.80665,
        ForceUnit::PoundForce => value / 4.4482216152605,
    }
}

/// 힘을 변환한다.
pub fn convert_force(value: f64, from: ForceUnit, to: ForceUnit) -> f64 {
    let n = to_newton(value, from);
    from_newton(n, to)
}
