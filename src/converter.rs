use crate::conversion::{self, ConversionError};
use crate::quantity::{AnyUnit, PhysicalQuantity, QuantityValue};

/// 변환기 적용 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConverterError {
    /// 입력 값의 물리량이 변환기가 기대하는 물리량과 다름
    QuantityMismatch {
        expected: PhysicalQuantity,
        actual: PhysicalQuantity,
    },
    /// 결과 단위를 정할 수 없는 단위 조합
    UnsupportedUnitPair {
        left: &'static str,
        right: &'static str,
    },
    /// 단항 변환기에 두 값을 전달했거나 그 반대
    ArityMismatch { expected: &'static str },
    /// 내부 단위 환산 실패
    Conversion(ConversionError),
}

impl std::fmt::Display for ConverterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConverterError::QuantityMismatch { expected, actual } => write!(
                f,
                "물리량 불일치: {} 필요, {} 입력",
                expected.name(),
                actual.name()
            ),
            ConverterError::UnsupportedUnitPair { left, right } => {
                write!(f, "지원하지 않는 단위 조합: {left} / {right}")
            }
            ConverterError::ArityMismatch { expected } => {
                write!(f, "변환기 형태 불일치: {expected} 필요")
            }
            ConverterError::Conversion(e) => write!(f, "단위 환산 오류: {e}"),
        }
    }
}

impl std::error::Error for ConverterError {}

impl From<ConversionError> for ConverterError {
    fn from(value: ConversionError) -> Self {
        ConverterError::Conversion(value)
    }
}

/// 이항 변환기의 연산자 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Times,
    Div,
}

impl Operator {
    /// UI 표기용 연산자 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Times => "×",
            Operator::Div => "÷",
        }
    }
}

pub type SingleFn = fn(&QuantityValue) -> Result<QuantityValue, ConverterError>;
pub type PairFn = fn(&QuantityValue, &QuantityValue) -> Result<QuantityValue, ConverterError>;

/// 한 물리량의 값을 다른 물리량으로 바꾸는 이름 붙은 변환기.
///
/// UI는 물리량별 변환기 목록을 열거해 "변환 대상" 선택지를 구성하고,
/// 선택된 변환기의 `convert`/`convert_with`를 호출한다. 실제 산술은 단위
/// 계층에 위임하며, 본문이 호출되기 전에 입력 값의 런타임 물리량을
/// 검사하므로 본문은 자신의 물리량 배리언트만 만난다.
#[derive(Clone)]
pub enum QuantityConverter {
    /// 값 하나를 받아 다른 물리량으로 바꾼다 (예: 시간 역수 → 주파수).
    Single {
        name: String,
        from: PhysicalQuantity,
        to: PhysicalQuantity,
        apply: SingleFn,
    },
    /// 오른쪽 피연산자와의 곱 또는 나눗셈으로 다른 물리량을 만든다.
    WithOperator {
        name: String,
        operator: Operator,
        left: PhysicalQuantity,
        right: PhysicalQuantity,
        result: PhysicalQuantity,
        apply: PairFn,
    },
}

impl QuantityConverter {
    /// 단항 변환기를 만든다.
    pub fn single(
        name: &str,
        from: PhysicalQuantity,
        to: PhysicalQuantity,
        apply: SingleFn,
    ) -> Self {
        QuantityConverter::Single {
            name: name.to_string(),
            from,
            to,
            apply,
        }
    }

    /// 이항 변환기를 만든다. 이름은 물리량 표기에서 조립한다.
    pub fn with_operator(
        left: PhysicalQuantity,
        operator: Operator,
        right: PhysicalQuantity,
        result: PhysicalQuantity,
        apply: PairFn,
    ) -> Self {
        let name = format!(
            "{} {} {} → {}",
            left.name(),
            operator.symbol(),
            right.name(),
            result.name()
        );
        QuantityConverter::WithOperator {
            name,
            operator,
            left,
            right,
            result,
            apply,
        }
    }

    /// UI 목록에 표시할 이름.
    pub fn name(&self) -> &str {
        match self {
            QuantityConverter::Single { name, .. } => name,
            QuantityConverter::WithOperator { name, .. } => name,
        }
    }

    /// 변환의 출발 물리량.
    pub fn source(&self) -> PhysicalQuantity {
        match self {
            QuantityConverter::Single { from, .. } => *from,
            QuantityConverter::WithOperator { left, .. } => *left,
        }
    }

    /// 변환의 결과 물리량.
    pub fn target(&self) -> PhysicalQuantity {
        match self {
            QuantityConverter::Single { to, .. } => *to,
            QuantityConverter::WithOperator { result, .. } => *result,
        }
    }

    /// 이항 변환기라면 연산자와 오른쪽 물리량을 반환한다.
    pub fn operand(&self) -> Option<(Operator, PhysicalQuantity)> {
        match self {
            QuantityConverter::Single { .. } => None,
            QuantityConverter::WithOperator {
                operator, right, ..
            } => Some((*operator, *right)),
        }
    }

    /// 단항 변환을 수행한다. 물리량 검사를 통과해야만 본문이 호출된다.
    pub fn convert(&self, value: &QuantityValue) -> Result<QuantityValue, ConverterError> {
        match self {
            QuantityConverter::Single { from, apply, .. } => {
                if value.quantity() != *from {
                    return Err(ConverterError::QuantityMismatch {
                        expected: *from,
                        actual: value.quantity(),
                    });
                }
                apply(value)
            }
            QuantityConverter::WithOperator { .. } => {
                Err(ConverterError::ArityMismatch { expected: "이항" })
            }
        }
    }

    /// 이항 변환을 수행한다. 좌우 물리량 검사를 통과해야만 본문이 호출된다.
    pub fn convert_with(
        &self,
        left_value: &QuantityValue,
        right_value: &QuantityValue,
    ) -> Result<QuantityValue, ConverterError> {
        match self {
            QuantityConverter::Single { .. } => {
                Err(ConverterError::ArityMismatch { expected: "단항" })
            }
            QuantityConverter::WithOperator {
                left,
                right,
                apply,
                ..
            } => {
                if left_value.quantity() != *left {
                    return Err(ConverterError::QuantityMismatch {
                        expected: *left,
                        actual: left_value.quantity(),
                    });
                }
                if right_value.quantity() != *right {
                    return Err(ConverterError::QuantityMismatch {
                        expected: *right,
                        actual: right_value.quantity(),
                    });
                }
                apply(left_value, right_value)
            }
        }
    }
}

/// 좌우 값을 지정한 단위로 환산해 곱한 뒤 결과 단위를 붙인다.
pub(crate) fn times(
    l: &QuantityValue,
    lu: AnyUnit,
    r: &QuantityValue,
    ru: AnyUnit,
    out: AnyUnit,
) -> Result<QuantityValue, ConverterError> {
    let lv = conversion::convert_to_unit(l, lu)?;
    let rv = conversion::convert_to_unit(r, ru)?;
    Ok(QuantityValue::new(lv.value * rv.value, out))
}

/// 좌측 값을 우측 값으로 나눈 뒤 결과 단위를 붙인다.
pub(crate) fn div(
    l: &QuantityValue,
    lu: AnyUnit,
    r: &QuantityValue,
    ru: AnyUnit,
    out: AnyUnit,
) -> Result<QuantityValue, ConverterError> {
    let lv = conversion::convert_to_unit(l, lu)?;
    let rv = conversion::convert_to_unit(r, ru)?;
    Ok(QuantityValue::new(lv.value / rv.value, out))
}

/// 값을 지정한 단위로 환산한 뒤 역수를 취해 결과 단위를 붙인다.
pub(crate) fn reciprocal(
    v: &QuantityValue,
    vu: AnyUnit,
    out: AnyUnit,
) -> Result<QuantityValue, ConverterError> {
    let cv = conversion::convert_to_unit(v, vu)?;
    Ok(QuantityValue::new(1.0 / cv.value, out))
}
