//! Workbook decoding via `calamine`.
//!
//! Any decoder failure is reported uniformly as
//! [`ExtractError::UnsupportedFormat`]; decoder-internal detail is not part
//! of this crate's contract.

use std::io::Cursor;

use calamine::{Data, Range, Reader, Xlsx};
use chrono::NaiveDateTime;
use sheetex_model::{CellValue, ExtractError, Result};

use crate::workbook::{Sheet, Workbook};

pub fn decode_workbook(bytes: &[u8]) -> Result<Workbook> {
    let mut reader =
        Xlsx::new(Cursor::new(bytes)).map_err(|_| ExtractError::UnsupportedFormat)?;

    let sheets = reader
        .worksheets()
        .into_iter()
        .enumerate()
        .map(|(index, (name, range))| Sheet::new(index, name, grid_from_range(&range)))
        .collect();

    Ok(Workbook { sheets })
}

/// Materialize the used range as a dense grid. The range window can start
/// past column A when leading columns are entirely empty; left-pad so column
/// indices stay absolute and error positions keep their spreadsheet labels.
fn grid_from_range(range: &Range<Data>) -> Vec<Vec<CellValue>> {
    let Some((_, start_column)) = range.start() else {
        return Vec::new();
    };
    let offset = start_column as usize;

    range
        .rows()
        .map(|row| {
            let mut cells = vec![CellValue::Null; offset];
            cells.extend(row.iter().map(cell_value));
            cells
        })
        .collect()
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::String(text) => CellValue::Text(text.clone()),
        Data::Int(value) => CellValue::Int(*value),
        Data::Float(value) => CellValue::Float(*value),
        Data::Bool(value) => CellValue::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => CellValue::DateTime(datetime),
            None => CellValue::Null,
        },
        Data::DateTimeIso(text) => match NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S") {
            Ok(datetime) => CellValue::DateTime(datetime),
            Err(_) => CellValue::Text(text.clone()),
        },
        Data::DurationIso(text) => CellValue::Text(text.clone()),
        Data::Error(error) => CellValue::Text(error.to_string()),
    }
}
