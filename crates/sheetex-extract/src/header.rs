//! Header-row validation against a requested field set.
//!
//! Duplicate detection is case-sensitive on the exact trimmed header text;
//! matching header names against field names is case-insensitive. All error
//! listings preserve first-seen order so messages are deterministic.

use std::collections::HashSet;

use sheetex_model::{CellValue, ExtractError, FieldLookup, FieldSpec, Result};

pub fn validate_header(
    header: &[CellValue],
    fields: &[FieldSpec],
    ignore_unindicated: Option<bool>,
) -> Result<()> {
    if fields
        .iter()
        .any(|field| field.column_name.trim().is_empty())
    {
        return Err(ExtractError::FieldConfiguration);
    }

    let names = header_names(header);

    let repeated = repeated_names(&names);
    if !repeated.is_empty() {
        return Err(ExtractError::RepeatedColumns { names: repeated });
    }

    let present: HashSet<String> = names.iter().map(|name| name.to_ascii_uppercase()).collect();
    let missing: Vec<String> = fields
        .iter()
        .filter(|field| !present.contains(&field.column_name.to_ascii_uppercase()))
        .map(|field| field.column_name.clone())
        .collect();
    if !missing.is_empty() {
        return Err(ExtractError::MissingColumns { names: missing });
    }

    if ignore_unindicated == Some(false) {
        let lookup = FieldLookup::new(fields);
        let unexpected: Vec<String> = names
            .iter()
            .filter(|name| !lookup.contains(name))
            .cloned()
            .collect();
        if !unexpected.is_empty() {
            return Err(ExtractError::UnexpectedColumns { names: unexpected });
        }
    }

    Ok(())
}

/// Header cell values left to right, trimmed; blank header cells are skipped
/// and do not count as column names.
fn header_names(header: &[CellValue]) -> Vec<String> {
    header
        .iter()
        .filter_map(|cell| {
            let text = cell.to_string();
            let trimmed = text.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        })
        .collect()
}

fn repeated_names(names: &[String]) -> Vec<String> {
    let mut repeated = Vec::new();
    for (position, name) in names.iter().enumerate() {
        if names[..position].contains(name) && !repeated.contains(name) {
            repeated.push(name.clone());
        }
    }
    repeated
}
