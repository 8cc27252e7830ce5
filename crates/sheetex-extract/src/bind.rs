//! Binding extracted rows to typed records.
//!
//! Rows serialize to JSON objects with insertion-ordered, case-preserved
//! keys; `serde` maps keys onto the record's declared field/rename bindings
//! by exact match. Fields with no matching key keep their default value, so
//! record types use `#[serde(default)]` or `Option` for columns that may be
//! absent. No validation happens here — that is the extractor's job.

use serde::de::DeserializeOwned;
use sheetex_model::{ExtractError, FieldSpec, Result, Row};

/// Declared column bindings for a record type: the explicit registration
/// table standing in for attribute reflection. One [`FieldSpec`] per bound
/// field, in declaration order.
pub trait RecordFields {
    fn record_fields() -> Vec<FieldSpec>;
}

/// Derive the validation schema from a record type's declaration. An empty
/// declaration list means the type never registered its bindings — a fatal
/// configuration error, raised before any row is read.
pub fn derive_schema<T: RecordFields>() -> Result<Vec<FieldSpec>> {
    let fields = T::record_fields();
    if fields.is_empty() {
        return Err(ExtractError::MissingFieldDeclaration {
            type_name: std::any::type_name::<T>(),
        });
    }
    Ok(fields)
}

/// Convert extracted rows into typed records. Fails only on structural
/// mismatch between a row value and the record's declared field type.
pub fn bind_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter()
        .enumerate()
        .map(|(index, row)| {
            serde_json::to_value(&row)
                .and_then(serde_json::from_value)
                .map_err(|source| ExtractError::Binding {
                    row: index + 1,
                    source,
                })
        })
        .collect()
}
