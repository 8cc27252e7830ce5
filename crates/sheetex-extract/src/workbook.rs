//! Decoded workbook model.
//!
//! This is the seam between the external decoder and the engine: everything
//! past [`crate::decode`] operates on these owned structures, and tests
//! build them directly.

use sheetex_model::CellValue;

/// A decoded workbook: sheets in file order.
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    pub fn sheet(&self, index: usize) -> Option<&Sheet> {
        self.sheets.iter().find(|sheet| sheet.index == index)
    }
}

/// One worksheet: a stable 0-based index, the sheet name, and a 2-D cell
/// grid addressable by `(row, column)`. Rows may be ragged; callers index
/// columns up to [`Sheet::column_count`].
#[derive(Debug, Clone)]
pub struct Sheet {
    pub index: usize,
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl Sheet {
    pub fn new(index: usize, name: impl Into<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self {
            index,
            name: name.into(),
            rows,
        }
    }

    /// Width of the widest row.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}
