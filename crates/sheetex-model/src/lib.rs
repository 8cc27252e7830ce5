pub mod error;
pub mod field;
pub mod lookup;
pub mod row;
pub mod value;

pub use error::{ExtractError, Result};
pub use field::{DataType, FieldSpec, SheetFieldSpec};
pub use lookup::FieldLookup;
pub use row::{ExtractionResult, Row, SheetRows};
pub use value::CellValue;
