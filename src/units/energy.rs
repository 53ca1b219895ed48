use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    Megajoule,
    Calorie,
    KiloCalorie,
    WattHour,
    KilowattHour,
    Btu,
    FootPound,
}

impl EnergyUnit {
    pub const ALL: [EnergyUnit; 9] = [
        EnergyUnit::Joule,
        EnergyUnit::Kilojoule,
        EnergyUnit::Megajoule,
        EnergyUnit::Calorie,
        EnergyUnit::KiloCalorie,
        EnergyUnit::WattHour,
        EnergyUnit::KilowattHour,
        EnergyUnit::Btu,
        EnergyUnit::FootPound,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::Megajoule => "MJ",
            EnergyUnit::Calorie => "cal",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::WattHour => "Wh",
            EnergyUnit::KilowattHour => "kWh",
            EnergyUnit::Btu => "Btu",
            EnergyUnit::FootPound => "ft·lb",
        }
    }
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::Megajoule => value * 1e6,
        EnergyUnit::Calorie => value * 4.184,
        EnergyUnit::KiloCalorie => value * 4184.0,
        EnergyUnit::WattHour => value * 3600.0,
        EnergyUnit::KilowattHour => value * 3.6e6,
        EnergyUnit::Btu => value * 1055.06,
        // 4.4482216152605 N * 0.3048 m
        EnergyUnit::FootPound => value * 1.3558179483314004,
    }
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value / 1000.0,
        EnergyUnit::Megajoule => value / 1e6,
        EnergyUnit::Calorie => value / 4.184,
        EnergyUnit::KiloCalorie => value / 4184.0,
        EnergyUnit::WattHour => value / 3600.0,
        EnergyUnit::KilowattHour => value / 3.6e6,
        EnergyUnit::Btu => value / 1055.06,
        EnergyUnit::FootPound => value / 1.3558179483314004,
    }
}

/// 에너지를 변환한다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}
