//! Schema files: JSON arrays of field declarations.
//!
//! Whole-workbook schemas carry a `"sheet"` index per entry (default 0);
//! single-sheet schemas are the same documents with `"sheet"` ignored.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sheetex_model::{FieldSpec, SheetFieldSpec};

pub fn load_sheet_schema(path: &Path) -> Result<Vec<SheetFieldSpec>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read schema: {}", path.display()))?;
    let fields: Vec<SheetFieldSpec> = serde_json::from_str(&contents)
        .with_context(|| format!("parse schema: {}", path.display()))?;
    Ok(fields)
}

pub fn load_field_schema(path: &Path) -> Result<Vec<FieldSpec>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read schema: {}", path.display()))?;
    let fields: Vec<FieldSpec> = serde_json::from_str(&contents)
        .with_context(|| format!("parse schema: {}", path.display()))?;
    Ok(fields)
}
