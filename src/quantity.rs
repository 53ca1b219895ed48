use crate::units::*;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicalQuantity {
    Length,
    Area,
    Volume,
    Time,
    Frequency,
    Mass,
    Density,
    SpecificVolume,
    Speed,
    Acceleration,
    Momentum,
    Force,
    Pressure,
    Energy,
    Power,
    ElectricCurrent,
    ElectricCharge,
    Voltage,
    ElectricResistance,
    Temperature,
}

impl PhysicalQuantity {
    pub const ALL: [PhysicalQuantity; 20] = [
        PhysicalQuantity::Length,
        PhysicalQuantity::Area,
        PhysicalQuantity::Volume,
        PhysicalQuantity::Time,
        PhysicalQuantity::Frequency,
        PhysicalQuantity::Mass,
        PhysicalQuantity::Density,
        PhysicalQuantity::SpecificVolume,
        PhysicalQuantity::Speed,
        PhysicalQuantity::Acceleration,
        PhysicalQuantity::Momentum,
        PhysicalQuantity::Force,
        PhysicalQuantity::Pressure,
        PhysicalQuantity::Energy,
        PhysicalQuantity::Power,
        PhysicalQuantity::ElectricCurrent,
        PhysicalQuantity::ElectricCharge,
        PhysicalQuantity::Voltage,
        PhysicalQuantity::ElectricResistance,
        PhysicalQuantity::Temperature,
    ];

    /// 영문 표기 이름. 변환기 이름 조립과 로그에 사용한다.
    pub fn name(self) -> &'static str {
        match self {
            PhysicalQuantity::Length => "Length",
            PhysicalQuantity::Area => "Area",
            PhysicalQuantity::Volume => "Volume",
            PhysicalQuantity::Time => "Time",
            PhysicalQuantity::Frequency => "Frequency",
            PhysicalQuantity::Mass => "Mass",
            PhysicalQuantity::Density => "Density",
            PhysicalQuantity::SpecificVolume => "Specific Volume",
            PhysicalQuantity::Speed => "Speed",
            PhysicalQuantity::Acceleration => "Acceleration",
            PhysicalQuantity::Momentum => "Momentum",
            PhysicalQuantity::Force => "Force",
            PhysicalQuantity::Pressure => "Pressure",
            PhysicalQuantity::Energy => "Energy",
            PhysicalQuantity::Power => "Power",
            PhysicalQuantity::ElectricCurrent => "Electric Current",
            PhysicalQuantity::ElectricCharge => "Electric Charge",
            PhysicalQuantity::Voltage => "Voltage",
            PhysicalQuantity::ElectricResistance => "Electric Resistance",
            PhysicalQuantity::Temperature => "Temperature",
        }
    }

    /// 해당 물리량에 속한 단위를 UI 열거용으로 반환한다.
    pub fn units(self) -> Vec<AnyUnit> {
        match self {
            PhysicalQuantity::Length => {
                LengthUnit::ALL.iter().copied().map(AnyUnit::Length).collect()
            }
            PhysicalQuantity::Area => AreaUnit::ALL.iter().copied().map(AnyUnit::Area).collect(),
            PhysicalQuantity::Volume => {
                VolumeUnit::ALL.iter().copied().map(AnyUnit::Volume).collect()
            }
            PhysicalQuantity::Time => TimeUnit::ALL.iter().copied().map(AnyUnit::Time).collect(),
            PhysicalQuantity::Frequency => FrequencyUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::Frequency)
                .collect(),
            PhysicalQuantity::Mass => MassUnit::ALL.iter().copied().map(AnyUnit::Mass).collect(),
            PhysicalQuantity::Density => {
                DensityUnit::ALL.iter().copied().map(AnyUnit::Density).collect()
            }
            PhysicalQuantity::SpecificVolume => SpecificVolumeUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::SpecificVolume)
                .collect(),
            PhysicalQuantity::Speed => SpeedUnit::ALL.iter().copied().map(AnyUnit::Speed).collect(),
            PhysicalQuantity::Acceleration => AccelerationUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::Acceleration)
                .collect(),
            PhysicalQuantity::Momentum => MomentumUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::Momentum)
                .collect(),
            PhysicalQuantity::Force => ForceUnit::ALL.iter().copied().map(AnyUnit::Force).collect(),
            PhysicalQuantity::Pressure => PressureUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::Pressure)
                .collect(),
            PhysicalQuantity::Energy => {
                EnergyUnit::ALL.iter().copied().map(AnyUnit::Energy).collect()
            }
            PhysicalQuantity::Power => PowerUnit::ALL.iter().copied().map(AnyUnit::Power).collect(),
            PhysicalQuantity::ElectricCurrent => ElectricCurrentUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::ElectricCurrent)
                .collect(),
            PhysicalQuantity::ElectricCharge => ElectricChargeUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::ElectricCharge)
                .collect(),
            PhysicalQuantity::Voltage => {
                VoltageUnit::ALL.iter().copied().map(AnyUnit::Voltage).collect()
            }
            PhysicalQuantity::ElectricResistance => ElectricResistanceUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::ElectricResistance)
                .collect(),
            PhysicalQuantity::Temperature => TemperatureUnit::ALL
                .iter()
                .copied()
                .map(AnyUnit::Temperature)
                .collect(),
        }
    }
}

/// 모든 구체 단위를 하나로 감싸는 합 타입.
///
/// 변환기 본문은 이 타입으로 좌/우 단위 조합을 패턴 매칭해 결과 단위를
/// 고른다. 단위가 어느 물리량에 속하는지는 배리언트가 결정하므로 값과
/// 물리량이 어긋날 수 없다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnyUnit {
    Length(LengthUnit),
    Area(AreaUnit),
    Volume(VolumeUnit),
    Time(TimeUnit),
    Frequency(FrequencyUnit),
    Mass(MassUnit),
    Density(DensityUnit),
    SpecificVolume(SpecificVolumeUnit),
    Speed(SpeedUnit),
    Acceleration(AccelerationUnit),
    Momentum(MomentumUnit),
    Force(ForceUnit),
    Pressure(PressureUnit),
    Energy(EnergyUnit),
    Power(PowerUnit),
    ElectricCurrent(ElectricCurrentUnit),
    ElectricCharge(ElectricChargeUnit),
    Voltage(VoltageUnit),
    ElectricResistance(ElectricResistanceUnit),
    Temperature(TemperatureUnit),
}

impl AnyUnit {
    /// 이 단위가 속한 물리량.
    pub fn quantity(self) -> PhysicalQuantity {
        match self {
            AnyUnit::Length(_) => PhysicalQuantity::Length,
            AnyUnit::Area(_) => PhysicalQuantity::Area,
            AnyUnit::Volume(_) => PhysicalQuantity::Volume,
            AnyUnit::Time(_) => PhysicalQuantity::Time,
            AnyUnit::Frequency(_) => PhysicalQuantity::Frequency,
            AnyUnit::Mass(_) => PhysicalQuantity::Mass,
            AnyUnit::Density(_) => PhysicalQuantity::Density,
            AnyUnit::SpecificVolume(_) => PhysicalQuantity::SpecificVolume,
            AnyUnit::Speed(_) => PhysicalQuantity::Speed,
            AnyUnit::Acceleration(_) => PhysicalQuantity::Acceleration,
            AnyUnit::Momentum(_) => PhysicalQuantity::Momentum,
            AnyUnit::Force(_) => PhysicalQuantity::Force,
            AnyUnit::Pressure(_) => PhysicalQuantity::Pressure,
            AnyUnit::Energy(_) => PhysicalQuantity::Energy,
            AnyUnit::Power(_) => PhysicalQuantity::Power,
            AnyUnit::ElectricCurrent(_) => PhysicalQuantity::ElectricCurrent,
            AnyUnit::ElectricCharge(_) => PhysicalQuantity::ElectricCharge,
            AnyUnit::Voltage(_) => PhysicalQuantity::Voltage,
            AnyUnit::ElectricResistance(_) => PhysicalQuantity::ElectricResistance,
            AnyUnit::Temperature(_) => PhysicalQuantity::Temperature,
        }
    }

    /// UI 표기용 단위 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            AnyUnit::Length(u) => u.symbol(),
            AnyUnit::Area(u) => u.symbol(),
            AnyUnit::Volume(u) => u.symbol(),
            AnyUnit::Time(u) => u.symbol(),
            AnyUnit::Frequency(u) => u.symbol(),
            AnyUnit::Mass(u) => u.symbol(),
            AnyUnit::Density(u) => u.symbol(),
            AnyUnit::SpecificVolume(u) => u.symbol(),
            AnyUnit::Speed(u) => u.symbol(),
            AnyUnit::Acceleration(u) => u.symbol(),
            AnyUnit::Momentum(u) => u.symbol(),
            AnyUnit::Force(u) => u.symbol(),
            AnyUnit::Pressure(u) => u.symbol(),
            AnyUnit::Energy(u) => u.symbol(),
            AnyUnit::Power(u) => u.symbol(),
            AnyUnit::ElectricCurrent(u) => u.symbol(),
            AnyUnit::ElectricCharge(u) => u.symbol(),
            AnyUnit::Voltage(u) => u.symbol(),
            AnyUnit::ElectricResistance(u) => u.symbol(),
            AnyUnit::Temperature(u) => u.symbol(),
        }
    }
}

/// 단위가 붙은 스칼라 값을 담는 컨테이너.
#[derive(Debug, Clone, Copy)]
pub struct QuantityValue {
    pub value: f64,
    pub unit: AnyUnit,
}

impl QuantityValue {
    pub fn new(value: f64, unit: AnyUnit) -> Self {
        Self { value, unit }
    }

    /// 값이 속한 물리량.
    pub fn quantity(&self) -> PhysicalQuantity {
        self.unit.quantity()
    }
}

impl std::fmt::Display for QuantityValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.value, self.unit.symbol())
    }
}
