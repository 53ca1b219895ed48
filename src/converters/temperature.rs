//! 온도(Temperature)에서 출발하는 변환 목록.

use crate::converter::QuantityConverter;

/// 온도 값에 적용할 수 있는 변환기를 열거한다.
///
/// 온도는 원점이 어긋난 아핀 척도라 곱셈/나눗셈 변환이 물리적으로 성립하지 않는다.
/// 단위 간 변환은 `units::convert_temperature`가 담당하고, 파생량 변환은 제공하지 않는다.
pub fn converters() -> Vec<QuantityConverter> {
    vec![]
}
