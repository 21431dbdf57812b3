//! 표시 문자열 기반 변환 엔진.
//!
//! `convert`는 조회 실패 시 입력값을 그대로 돌려주고, `try_convert`는 같은 조회를
//! 오류로 보고한다.

use thiserror::Error;

use crate::units::{
    convert_temperature, convert_temperature_tokens, Registry, TemperatureUnit, UnitDefinition,
};

/// 알 수 없는 범주일 때 돌려주는 표시 목록.
pub const FALLBACK_DISPLAY_UNIT: &str = "Unit";

const TEMPERATURE: &str = "Temperature";

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 레지스트리에 없는 범주
    #[error("unknown category: {0}")]
    UnknownCategory(String),
    /// 범주 안에 없는 단위 약어
    #[error("unknown unit {unit} in {category}")]
    UnknownUnit { category: String, unit: String },
}

/// 범주의 표시 문자열 목록을 등록 순서대로 반환한다.
///
/// 알 수 없는 범주이면 `["Unit"]`을 반환한다.
pub fn list_display_units(category: &str) -> Vec<String> {
    match Registry::global().category(category) {
        Some(cat) => cat.display_units(),
        None => {
            tracing::debug!(category, "unknown category, using placeholder unit list");
            vec![FALLBACK_DISPLAY_UNIT.to_string()]
        }
    }
}

/// 표시 문자열에서 첫 번째 괄호 안의 약어를 꺼낸다 (`"Meters (m)"` → `"m"`).
///
/// 괄호 안에 줄바꿈이 있으면 그 괄호는 건너뛴다. 괄호 쌍이 없으면 입력 전체를
/// 약어로 본다.
pub fn extract_abbreviation(display: &str) -> &str {
    for (open, _) in display.match_indices('(') {
        let rest = &display[open + 1..];
        if let Some(close) = rest.find([')', '\n']) {
            if rest[close..].starts_with(')') {
                return &rest[..close];
            }
        }
    }
    display
}

/// 값을 한 단위에서 다른 단위로 변환한다.
///
/// 범주나 단위를 찾지 못하면 입력값을 그대로 돌려준다. 온도는 모르는 토큰을
/// 섭씨로 간주한다.
pub fn convert(category: &str, value: f64, from_display: &str, to_display: &str) -> f64 {
    let from = extract_abbreviation(from_display);
    let to = extract_abbreviation(to_display);

    if category == TEMPERATURE {
        return convert_temperature_tokens(value, from, to);
    }

    match convert_linear(Registry::global(), category, value, from, to) {
        Ok(v) => v,
        Err(err) => {
            tracing::debug!(%err, value, "conversion unresolved, returning input");
            value
        }
    }
}

/// `convert`와 같은 조회를 하되 실패를 오류로 돌려준다.
pub fn try_convert(
    category: &str,
    value: f64,
    from_display: &str,
    to_display: &str,
) -> Result<f64, ConversionError> {
    try_convert_in(Registry::global(), category, value, from_display, to_display)
}

/// 지정한 레지스트리로 엄격하게 변환한다.
pub fn try_convert_in(
    registry: &Registry,
    category: &str,
    value: f64,
    from_display: &str,
    to_display: &str,
) -> Result<f64, ConversionError> {
    let from = extract_abbreviation(from_display);
    let to = extract_abbreviation(to_display);

    if category == TEMPERATURE {
        let from_unit = parse_temperature_unit(from)?;
        let to_unit = parse_temperature_unit(to)?;
        return Ok(convert_temperature(value, from_unit, to_unit));
    }

    convert_linear(registry, category, value, from, to)
}

/// 조회가 끝난 단위 정의끼리 기준 단위를 거쳐 변환한다.
pub fn convert_units(value: f64, from: &UnitDefinition, to: &UnitDefinition) -> f64 {
    if from.abbreviation == to.abbreviation {
        return value;
    }
    let base = value * from.scale_to_base;
    base / to.scale_to_base
}

fn convert_linear(
    registry: &Registry,
    category: &str,
    value: f64,
    from: &str,
    to: &str,
) -> Result<f64, ConversionError> {
    let cat = registry
        .category(category)
        .ok_or_else(|| ConversionError::UnknownCategory(category.to_string()))?;
    let unknown = |unit: &str| ConversionError::UnknownUnit {
        category: category.to_string(),
        unit: unit.to_string(),
    };
    let from_def = cat.unit(from).ok_or_else(|| unknown(from))?;
    let to_def = cat.unit(to).ok_or_else(|| unknown(to))?;
    Ok(convert_units(value, from_def, to_def))
}

fn parse_temperature_unit(token: &str) -> Result<TemperatureUnit, ConversionError> {
    TemperatureUnit::from_abbreviation(token).ok_or_else(|| ConversionError::UnknownUnit {
        category: TEMPERATURE.to_string(),
        unit: token.to_string(),
    })
}
