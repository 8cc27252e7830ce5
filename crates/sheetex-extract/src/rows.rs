//! Per-row extraction and field validation.

use sheetex_model::{CellValue, ExtractError, FieldLookup, FieldSpec, Result, Row};

use crate::convert::convert;

/// Build the keyed row for one data row. Walks columns left to right:
/// nameless blank cells are skipped, a value under a blank header is fatal,
/// and when a schema is active each named cell is validated (or dropped, for
/// unindicated columns in ignore mode).
pub fn extract_row(
    row: &[CellValue],
    header: &[CellValue],
    column_count: usize,
    fields: Option<&FieldLookup<'_>>,
    ignore_unindicated: Option<bool>,
) -> Result<Row> {
    let mut extracted = Row::new();

    for column_index in 0..column_count {
        let name = header
            .get(column_index)
            .map(|cell| cell.to_string())
            .unwrap_or_default();
        let name = name.trim();
        let value = row.get(column_index).cloned().unwrap_or(CellValue::Null);

        let has_name = !name.is_empty();
        let has_value = !value.is_blank();

        if !has_name && !has_value {
            continue;
        }
        if !has_name {
            return Err(ExtractError::OrphanValue {
                column: column_label(column_index),
            });
        }

        let value = match fields {
            Some(lookup) => match lookup.get(name) {
                Some(field) => validate_field(field, name, value)?,
                // Unindicated column: dropped in ignore mode, otherwise
                // carried through unvalidated (header validation already
                // decided whether its presence is acceptable).
                None if ignore_unindicated == Some(true) => continue,
                None => value,
            },
            None => value,
        };

        extracted.push(name, value);
    }

    Ok(extracted)
}

/// Required-ness and type conformance for one cell. The two axes are
/// independent: an optional field with a present-but-wrong-typed value still
/// fails conversion; an absent value never reaches conversion.
pub fn validate_field(field: &FieldSpec, column_name: &str, value: CellValue) -> Result<CellValue> {
    let has_value = !value.is_blank();

    if field.required && !has_value {
        return Err(ExtractError::RequiredField {
            column: column_name.to_string(),
        });
    }

    let Some(data_type) = field.data_type else {
        return Ok(value);
    };
    if !has_value {
        return Ok(value);
    }

    convert(&value, data_type).ok_or_else(|| ExtractError::TypeMismatch {
        column: column_name.to_string(),
        expected: data_type.label(),
    })
}

/// Spreadsheet-style column label: 0 -> "A", 25 -> "Z", 26 -> "AA".
fn column_label(index: usize) -> String {
    let mut index = index;
    let mut label = String::new();
    loop {
        label.insert(0, char::from(b'A' + (index % 26) as u8));
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    label
}
