//! Schema-validated extraction of tabular data from workbook files.
//!
//! The byte-level entry points decode with `calamine` and hand off to their
//! workbook-level counterparts, which operate on the owned [`Workbook`]
//! model and are what tests drive directly.

pub mod bind;
pub mod convert;
pub mod decode;
pub mod header;
pub mod rows;
pub mod sanitize;
pub mod workbook;

use serde::de::DeserializeOwned;
use sheetex_model::{
    ExtractError, ExtractionResult, FieldLookup, FieldSpec, Result, SheetFieldSpec, SheetRows,
};

pub use bind::{RecordFields, bind_rows, derive_schema};
pub use decode::decode_workbook;
pub use workbook::{Sheet, Workbook};

/// Extract every sheet of the workbook without a schema. When
/// `exclude_thin_sheets` is set, sheets with no data rows (0 or 1 rows) are
/// omitted from the result instead of contributing an empty entry.
pub fn extract_all(bytes: &[u8], exclude_thin_sheets: bool) -> Result<ExtractionResult> {
    let workbook = decode_workbook(bytes)?;
    tracing::info!(sheets = workbook.sheets.len(), "workbook decoded");
    extract_workbook(workbook, exclude_thin_sheets)
}

/// Extract every sheet, validating each against the fields scoped to it.
/// `ignore_unindicated` controls columns present in a sheet but absent from
/// the schema: `true` drops them without validation, `false` makes them an
/// error.
pub fn extract_validated(
    bytes: &[u8],
    fields: &[SheetFieldSpec],
    ignore_unindicated: bool,
    exclude_thin_sheets: bool,
) -> Result<ExtractionResult> {
    let workbook = decode_workbook(bytes)?;
    tracing::info!(sheets = workbook.sheets.len(), "workbook decoded");
    extract_workbook_validated(workbook, fields, ignore_unindicated, exclude_thin_sheets)
}

/// Extract one sheet as keyed rows, optionally validated.
pub fn extract_sheet(
    bytes: &[u8],
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: bool,
    sheet_index: usize,
) -> Result<SheetRows> {
    let workbook = decode_workbook(bytes)?;
    extract_workbook_sheet(workbook, fields, ignore_unindicated, sheet_index)
}

/// Extract one sheet and bind its rows to a record type. With `fields =
/// None` the schema is derived from the type's [`RecordFields`] declaration.
pub fn extract_sheet_as<T>(
    bytes: &[u8],
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: bool,
    sheet_index: usize,
) -> Result<Vec<T>>
where
    T: RecordFields + DeserializeOwned,
{
    let workbook = decode_workbook(bytes)?;
    extract_workbook_sheet_as(workbook, fields, ignore_unindicated, sheet_index)
}

/// Workbook-level counterpart of [`extract_all`].
pub fn extract_workbook(
    mut workbook: Workbook,
    exclude_thin_sheets: bool,
) -> Result<ExtractionResult> {
    sanitize_workbook(&mut workbook);
    extract_workbook_rows(&workbook, None, None, exclude_thin_sheets)
}

/// Workbook-level counterpart of [`extract_validated`].
pub fn extract_workbook_validated(
    mut workbook: Workbook,
    fields: &[SheetFieldSpec],
    ignore_unindicated: bool,
    exclude_thin_sheets: bool,
) -> Result<ExtractionResult> {
    sanitize_workbook(&mut workbook);
    extract_workbook_rows(
        &workbook,
        Some(fields),
        Some(ignore_unindicated),
        exclude_thin_sheets,
    )
}

/// Workbook-level counterpart of [`extract_sheet`].
pub fn extract_workbook_sheet(
    mut workbook: Workbook,
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: bool,
    sheet_index: usize,
) -> Result<SheetRows> {
    sanitize_workbook(&mut workbook);
    extract_sheet_rows(&workbook, sheet_index, fields, Some(ignore_unindicated))
}

/// Workbook-level counterpart of [`extract_sheet_as`].
pub fn extract_workbook_sheet_as<T>(
    workbook: Workbook,
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: bool,
    sheet_index: usize,
) -> Result<Vec<T>>
where
    T: RecordFields + DeserializeOwned,
{
    let derived;
    let fields = match fields {
        Some(fields) => fields,
        None => {
            derived = derive_schema::<T>()?;
            derived.as_slice()
        }
    };
    let rows = extract_workbook_sheet(workbook, Some(fields), ignore_unindicated, sheet_index)?;
    bind_rows(rows)
}

fn sanitize_workbook(workbook: &mut Workbook) {
    for sheet in &mut workbook.sheets {
        sanitize::sanitize(sheet);
    }
}

fn extract_workbook_rows(
    workbook: &Workbook,
    fields: Option<&[SheetFieldSpec]>,
    ignore_unindicated: Option<bool>,
    exclude_thin_sheets: bool,
) -> Result<ExtractionResult> {
    let sheet_count = workbook.sheets.len();

    // Fail fast, before any sheet is processed.
    if let Some(fields) = fields
        && let Some(out_of_range) = fields.iter().find(|field| field.sheet_index >= sheet_count)
    {
        return Err(ExtractError::SheetIndexOutOfRange {
            index: out_of_range.sheet_index,
            sheet_count,
        });
    }

    let mut results: ExtractionResult = Vec::with_capacity(sheet_count);
    for sheet in &workbook.sheets {
        let row_count = sheet.rows.len();
        if exclude_thin_sheets && row_count <= 1 {
            tracing::debug!(
                sheet = sheet.index,
                name = %sheet.name,
                rows = row_count,
                "excluding sheet without data rows"
            );
            continue;
        }

        let sheet_fields: Option<Vec<FieldSpec>> = fields.map(|all| {
            all.iter()
                .filter(|field| field.sheet_index == sheet.index)
                .map(|field| field.field.clone())
                .collect()
        });

        let rows = if row_count > 1 {
            extract_sheet_data(sheet, sheet_fields.as_deref(), ignore_unindicated)?
        } else {
            Vec::new()
        };
        tracing::debug!(
            sheet = sheet.index,
            name = %sheet.name,
            rows = rows.len(),
            "extracted sheet"
        );
        results.push(rows);
    }

    if results.iter().all(Vec::is_empty) {
        return Err(ExtractError::NoData);
    }
    Ok(results)
}

fn extract_sheet_rows(
    workbook: &Workbook,
    sheet_index: usize,
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: Option<bool>,
) -> Result<SheetRows> {
    let sheet = workbook
        .sheet(sheet_index)
        .ok_or(ExtractError::SheetIndexOutOfRange {
            index: sheet_index,
            sheet_count: workbook.sheets.len(),
        })?;

    if sheet.rows.is_empty() {
        return Err(ExtractError::EmptySheet { index: sheet_index });
    }

    let rows = extract_sheet_data(sheet, fields, ignore_unindicated)?;
    if rows.is_empty() {
        return Err(ExtractError::HeaderOnly { index: sheet_index });
    }
    Ok(rows)
}

/// Extract the data rows of one sanitized sheet. Row 0 is the header; an
/// empty field list disables validation for this sheet.
fn extract_sheet_data(
    sheet: &Sheet,
    fields: Option<&[FieldSpec]>,
    ignore_unindicated: Option<bool>,
) -> Result<SheetRows> {
    let column_count = sheet.column_count();
    let header = &sheet.rows[0];

    let active = fields.filter(|fields| !fields.is_empty());
    if let Some(fields) = active {
        header::validate_header(header, fields, ignore_unindicated)?;
    }
    let lookup = active.map(FieldLookup::new);

    sheet.rows[1..]
        .iter()
        .map(|row| rows::extract_row(row, header, column_count, lookup.as_ref(), ignore_unindicated))
        .collect()
}
