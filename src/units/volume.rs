use serde::{Deserialize, Serialize};

/// 체적 단위. 내부 기준은 세제곱미터(m³)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VolumeUnit {
    CubicMeter,
    Liter,
    Milliliter,
    CubicFoot,
    CubicInch,
    UsGallon,
}

impl VolumeUnit {
    pub const ALL: [VolumeUnit; 6] = [
        VolumeUnit::CubicMeter,
        VolumeUnit::Liter,
        VolumeUnit::Milliliter,
        VolumeUnit::CubicFoot,
        VolumeUnit::CubicInch,
        VolumeUnit::UsGallon,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            VolumeUnit::CubicMeter => "m3",
            VolumeUnit::Liter => "L",
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::CubicFoot => "ft3",
            VolumeUnit::CubicInch => "in3",
            VolumeUnit::UsGallon => "gal",
        }
    }
}

fn to_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value * 0.001,
        VolumeUnit::Milliliter => value * 1e-6,
        VolumeUnit::CubicFoot => value * 0.028316846592,
        VolumeUnit::CubicInch => value * 1.6387064e-5,
        VolumeUnit::UsGallon => value * 0.003785411784,
    }
}

fn from_cubic_meter(value: f64, unit: VolumeUnit) -> f64 {
    match unit {
        VolumeUnit::CubicMeter => value,
        VolumeUnit::Liter => value / 0.001,
        VolumeUnit::Milliliter => value / 1e-6,
        VolumeUnit::CubicFoot => value / 0.028316846592,
        VolumeUnit::CubicInch => value / 1.6387064e-5,
        VolumeUnit::UsGallon => value / 0.003785411784,
    }
}

/// 체적을 변환한다.
pub fn convert_volume(value: f64, from: VolumeUnit, to: VolumeUnit) -> f64 {
    let m3 = to_cubic_meter(value, from);
    from_cubic_meter(m3, to)
}
