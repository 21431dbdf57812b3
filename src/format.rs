//! 변환 결과를 화면용 문자열로 다듬는 도우미.

use thiserror::Error;

use crate::conversion::{extract_abbreviation, list_display_units};

/// 소수 자릿수 상한. f64 유효숫자를 넘는 자릿수는 의미가 없다.
pub const MAX_DECIMALS: usize = 15;

/// 사용자 입력 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("Please enter a valid number")]
    InvalidNumber(String),
}

/// 입력 문자열을 숫자로 읽는다. 앞뒤 공백은 무시한다.
pub fn parse_input(text: &str) -> Result<f64, InputError> {
    let trimmed = text.trim();
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(InputError::InvalidNumber(trimmed.to_string())),
    }
}

/// 고정 소수 자릿수로 표시한다.
pub fn format_value(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals.min(MAX_DECIMALS), value)
}

/// 입력값 표시. 정수 값도 `5.0`처럼 소수점 한 자리를 남긴다.
pub fn format_input(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}

/// `"<값> <원래 약어> = <결과> <대상 약어>"` 한 줄을 만든다.
pub fn format_conversion(
    value: f64,
    from_display: &str,
    result: f64,
    to_display: &str,
    decimals: usize,
) -> String {
    format!(
        "{} {} = {} {}",
        format_input(value),
        extract_abbreviation(from_display),
        format_value(result, decimals),
        extract_abbreviation(to_display)
    )
}

/// 결과 문자열에서 결과 수치 부분만 뽑는다. 없으면 `None`.
pub fn numeric_part(formatted: &str) -> Option<&str> {
    let (_, rhs) = formatted.split_once(" = ")?;
    let number = rhs.split_whitespace().next()?;
    number.parse::<f64>().ok().map(|_| number)
}

/// 선택 목록 기본값: 첫 항목에서 마지막 항목으로.
pub fn default_selection(category: &str) -> (String, String) {
    let units = list_display_units(category);
    let first = units.first().cloned().unwrap_or_default();
    let last = units.last().cloned().unwrap_or_default();
    (first, last)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_fixed_decimals() {
        assert_eq!(format_value(8.04672, 2), "8.05");
        assert_eq!(format_value(1024.0, 5), "1024.00000");
        assert_eq!(format_value(1.0, 40).len(), "1.".len() + MAX_DECIMALS);
    }

    #[test]
    fn conversion_line_uses_abbreviations() {
        let line = format_conversion(5.0, "Miles (mi)", 8.0467, "Kilometers (km)", 2);
        assert_eq!(line, "5.0 mi = 8.05 km");
        assert_eq!(numeric_part(&line), Some("8.05"));
    }

    #[test]
    fn input_keeps_one_decimal_for_whole_numbers() {
        assert_eq!(format_input(5.0), "5.0");
        assert_eq!(format_input(-40.0), "-40.0");
        assert_eq!(format_input(1609.34), "1609.34");
        assert_eq!(format_input(0.5), "0.5");
    }

    #[test]
    fn numeric_part_rejects_messages() {
        assert_eq!(numeric_part("Please enter a valid number"), None);
        assert_eq!(numeric_part(""), None);
    }

    #[test]
    fn parse_input_trims_and_rejects_text() {
        assert_eq!(parse_input(" 12.5 \n"), Ok(12.5));
        let err = parse_input("abc").unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid number");
        assert!(parse_input("").is_err());
        assert!(parse_input("NaN").is_err());
    }

    #[test]
    fn default_selection_is_first_and_last() {
        let (from, to) = default_selection("Length");
        assert_eq!(from, "Meters (m)");
        assert_eq!(to, "Miles (mi)");
        let (from, to) = default_selection("Nope");
        assert_eq!(from, "Unit");
        assert_eq!(to, "Unit");
    }
}
