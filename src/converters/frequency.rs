//! 주파수(Frequency)에서 출발하는 변환 목록.

use crate::converter::{reciprocal, QuantityConverter};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};
use crate::units::*;

/// 주파수 값에 적용할 수 있는 변환기를 열거한다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![QuantityConverter::single(
        "1 / Frequency → Time",
        PhysicalQuantity::Frequency,
        PhysicalQuantity::Time,
        |v: &QuantityValue| {
            reciprocal(
                v,
                AnyUnit::Frequency(FrequencyUnit::Hertz),
                AnyUnit::Time(TimeUnit::Second),
            )
        },
    )]
}
