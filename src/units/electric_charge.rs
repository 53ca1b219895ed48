use serde::{Deserialize, Serialize};

/// 전하 단위. 내부 기준은 쿨롱(C)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElectricChargeUnit {
    Coulomb,
    Millicoulomb,
    AmpereHour,
    MilliampereHour,
}

impl ElectricChargeUnit {
    pub const ALL: [ElectricChargeUnit; 4] = [
        ElectricChargeUnit::Coulomb,
        ElectricChargeUnit::Millicoulomb,
        ElectricChargeUnit::AmpereHour,
        ElectricChargeUnit::MilliampereHour,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            ElectricChargeUnit::Coulomb => "C",
            ElectricChargeUnit::Millicoulomb => "mC",
            ElectricChargeUnit::AmpereHour => "Ah",
            ElectricChargeUnit::MilliampereHour => "mAh",
        }
    }
}

fn to_coulomb(value: f64, unit: ElectricChargeUnit) -> f64 {
    match unit {
        ElectricChargeUnit::Coulomb => value,
        ElectricChargeUnit::Millicoulomb => value * 1e-3,
        ElectricChargeUnit::AmpereHour => value * 3600.0,
        ElectricChargeUnit::MilliampereHour => value * 3.6,
    }
}

fn from_coulomb(value: f64, unit: ElectricChargeUnit) -> f64 {
    match unit {
        ElectricChargeUnit::Coulomb => value,
        ElectricChargeUnit::Millicoulomb => value / 1e-3,
        ElectricChargeUnit::AmpereHour => value / 3600.0,
        ElectricChargeUnit::MilliampereHour => value / 3.6,
    }
}

/// 전하를 변환한다.
pub fn convert_electric_charge(
    value: f64,
    from: ElectricChargeUnit,
    to: ElectricChargeUnit,
) -> f64 {
    let c = to_coulomb(value, from);
    from_coulomb(c, to)
}
