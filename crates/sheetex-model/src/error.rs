use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported workbook format")]
    UnsupportedFormat,

    #[error("sheet index {index} does not exist (workbook has {sheet_count} sheet(s))")]
    SheetIndexOutOfRange { index: usize, sheet_count: usize },

    #[error("sheet {index} has no rows")]
    EmptySheet { index: usize },

    #[error("sheet {index} has only a header row")]
    HeaderOnly { index: usize },

    #[error("workbook contains no data")]
    NoData,

    #[error("repeated columns: {}", .names.join(", "))]
    RepeatedColumns { names: Vec<String> },

    #[error("missing columns: {}", .names.join(", "))]
    MissingColumns { names: Vec<String> },

    #[error("columns not declared in the schema: {}", .names.join(", "))]
    UnexpectedColumns { names: Vec<String> },

    #[error("column {column} has a value but no header")]
    OrphanValue { column: String },

    #[error("required field '{column}' has no value")]
    RequiredField { column: String },

    #[error("values in column '{column}' must be {expected}")]
    TypeMismatch {
        column: String,
        expected: &'static str,
    },

    #[error("unknown data type '{name}'")]
    UnknownDataType { name: String },

    #[error("every field must declare a non-empty column name")]
    FieldConfiguration,

    #[error("record type {type_name} declares no column bindings")]
    MissingFieldDeclaration { type_name: &'static str },

    #[error("row {row}: cannot bind to record: {source}")]
    Binding {
        row: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, ExtractError>;
