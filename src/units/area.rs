use serde::{Deserialize, Serialize};

/// 면적 단위. 내부 기준은 제곱미터(m²)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AreaUnit {
    SquareMeter,
    SquareCentimeter,
    SquareKilometer,
    SquareInch,
    SquareFoot,
}

impl AreaUnit {
    pub const ALL: [AreaUnit; 5] = [
        AreaUnit::SquareMeter,
        AreaUnit::SquareCentimeter,
        AreaUnit::SquareKilometer,
        AreaUnit::SquareInch,
        AreaUnit::SquareFoot,
    ];

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            AreaUnit::SquareMeter => "m2",
            AreaUnit::SquareCentimeter => "cm2",
            AreaUnit::SquareKilometer => "km2",
            AreaUnit::SquareInch => "in2",
            AreaUnit::SquareFoot => "ft2",
        }
    }
}

fn to_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareCentimeter => value * 1e-4,
        AreaUnit::SquareKilometer => value * 1e6,
        AreaUnit::SquareInch => value * 0.00064516,
        AreaUnit::SquareFoot => value * 0.09290304,
    }
}

fn from_square_meter(value: f64, unit: AreaUnit) -> f64 {
    match unit {
        AreaUnit::SquareMeter => value,
        AreaUnit::SquareCentimeter => value / 1e-4,
        AreaUnit::SquareKilometer => value / 1e6,
        AreaUnit::SquareInch => value / 0.00064516,
        AreaUnit::SquareFoot => value / 0.09290304,
    }
}

/// 면적을 변환한다.
pub fn convert_area(value: f64, from: AreaUnit, to: AreaUnit) -> f64 {
    let m2 = to_square_meter(value, from);
    from_square_meter(m2, to)
}
