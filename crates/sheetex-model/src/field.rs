//! Field schemas: what the caller expects a sheet to contain.
//!
//! A [`FieldSpec`] describes one column — its name, whether a value is
//! mandatory, and an optional data type the values must convert to. A
//! [`SheetFieldSpec`] scopes a field to one sheet of a multi-sheet workbook.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ExtractError;

/// Data types a field can be validated and converted against.
///
/// Each variant maps to exactly one native target and one human-readable
/// label used in error messages. Adding a variant means adding its label and
/// a conversion arm; the exhaustive matches are the registration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// 64-bit signed integer.
    Integer,
    /// 64-bit float.
    Decimal,
    /// Text (identity conversion for string cells).
    String,
    /// Calendar timestamp without timezone.
    DateTime,
}

impl DataType {
    /// Canonical lowercase name, as written in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            DataType::Integer => "integer",
            DataType::Decimal => "decimal",
            DataType::String => "string",
            DataType::DateTime => "datetime",
        }
    }

    /// Human-readable label used in validation error messages.
    pub fn label(&self) -> &'static str {
        match self {
            DataType::Integer => "integer number",
            DataType::Decimal => "decimal number",
            DataType::String => "text",
            DataType::DateTime => "date and time",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DataType {
    type Err = ExtractError;

    /// Parse a data type name case-insensitively. Unknown names are a schema
    /// misconfiguration and fail before any workbook byte is read.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "integer" | "int" => Ok(DataType::Integer),
            "decimal" | "float" => Ok(DataType::Decimal),
            "string" | "text" => Ok(DataType::String),
            "datetime" | "date" => Ok(DataType::DateTime),
            _ => Err(ExtractError::UnknownDataType {
                name: s.trim().to_string(),
            }),
        }
    }
}

impl<'de> Deserialize<'de> for DataType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

/// A caller-declared expectation about one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Column name; matched case-insensitively against header cells.
    #[serde(rename = "column")]
    pub column_name: String,
    /// Whether every data row must carry a value for this column.
    #[serde(default)]
    pub required: bool,
    /// Optional data type the values must convert to.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<DataType>,
}

impl FieldSpec {
    pub fn new(column_name: impl Into<String>) -> Self {
        Self {
            column_name: column_name.into(),
            required: false,
            data_type: None,
        }
    }

    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    #[must_use]
    pub fn with_type(mut self, data_type: DataType) -> Self {
        self.data_type = Some(data_type);
        self
    }
}

/// A [`FieldSpec`] scoped to one sheet of a multi-sheet extraction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SheetFieldSpec {
    #[serde(flatten)]
    pub field: FieldSpec,
    /// 0-based worksheet index the field applies to.
    #[serde(rename = "sheet", default)]
    pub sheet_index: usize,
}

impl SheetFieldSpec {
    pub fn new(sheet_index: usize, field: FieldSpec) -> Self {
        Self { field, sheet_index }
    }
}
