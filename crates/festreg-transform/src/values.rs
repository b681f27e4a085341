//! Cell-value helpers over polars `AnyValue`.

use polars::prelude::AnyValue;

/// Render a cell as a string. Nulls become the empty string, which is the
/// fill value every downstream serializer expects.
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Boolean(v) => v.to_string(),
        other => other.to_string(),
    }
}

/// Numeric view of a cell; strings are parsed, nulls and non-numbers are None.
pub fn any_to_f64(value: AnyValue<'_>) -> Option<f64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int32(v) => Some(f64::from(v)),
        AnyValue::Int64(v) => Some(v as f64),
        AnyValue::UInt32(v) => Some(f64::from(v)),
        AnyValue::UInt64(v) => Some(v as f64),
        AnyValue::Float32(v) => Some(f64::from(v)),
        AnyValue::Float64(v) => Some(v),
        AnyValue::String(s) => parse_trimmed(s),
        AnyValue::StringOwned(s) => parse_trimmed(&s),
        _ => None,
    }
}

/// Integer view of a cell; floats truncate toward zero.
pub fn any_to_i64(value: AnyValue<'_>) -> Option<i64> {
    match value {
        AnyValue::Null => None,
        AnyValue::Int32(v) => Some(i64::from(v)),
        AnyValue::Int64(v) => Some(v),
        AnyValue::UInt32(v) => Some(i64::from(v)),
        AnyValue::UInt64(v) => i64::try_from(v).ok(),
        AnyValue::Float32(v) => Some(v as i64),
        AnyValue::Float64(v) => Some(v as i64),
        AnyValue::String(s) => s.trim().parse::<i64>().ok(),
        AnyValue::StringOwned(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Normalize a mobile-number cell into a plain digit string.
///
/// Databases hand these back as integers, floats, or text; the SMS gateway
/// wants a single numeric string with no separators.
pub fn mobile_digits(value: AnyValue<'_>) -> Option<String> {
    if let Some(number) = any_to_i64(value.clone()) {
        if number > 0 {
            return Some(number.to_string());
        }
    }
    let digits: String = any_to_string(value)
        .chars()
        .filter(|ch| ch.is_ascii_digit())
        .collect();
    (!digits.is_empty()).then_some(digits)
}

fn format_numeric(v: f64) -> String {
    let rendered = format!("{v}");
    if rendered.contains('.') {
        rendered
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        rendered
    }
}

fn parse_trimmed(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
