//! Type conversion registry.
//!
//! Maps each [`DataType`] to its native target. Conversion failure is a
//! recoverable, caller-visible condition (`None`), never a panic. Blank
//! values are rejected by the field validator before conversion is invoked.

use chrono::{NaiveDate, NaiveDateTime};
use sheetex_model::{CellValue, DataType};

/// Convert `value` to the native target of `data_type`. Returns `None` when
/// the source representation cannot be parsed as the target type.
pub fn convert(value: &CellValue, data_type: DataType) -> Option<CellValue> {
    match data_type {
        DataType::Integer => to_integer(value).map(CellValue::Int),
        DataType::Decimal => to_decimal(value).map(CellValue::Float),
        DataType::String => to_text(value).map(CellValue::Text),
        DataType::DateTime => to_datetime(value).map(CellValue::DateTime),
    }
}

fn to_integer(value: &CellValue) -> Option<i64> {
    match value {
        CellValue::Int(value) => Some(*value),
        CellValue::Float(value) if value.is_finite() && value.fract() == 0.0 => {
            Some(*value as i64)
        }
        CellValue::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn to_decimal(value: &CellValue) -> Option<f64> {
    match value {
        CellValue::Int(value) => Some(*value as f64),
        CellValue::Float(value) => Some(*value),
        CellValue::Text(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn to_text(value: &CellValue) -> Option<String> {
    match value {
        CellValue::Null => None,
        CellValue::Text(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

fn to_datetime(value: &CellValue) -> Option<NaiveDateTime> {
    match value {
        CellValue::DateTime(value) => Some(*value),
        CellValue::Text(text) => {
            let text = text.trim();
            for format in DATETIME_FORMATS {
                if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
                    return Some(parsed);
                }
            }
            // Date-only text extends to midnight.
            NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        }
        _ => None,
    }
}
