//! Command implementations.

use std::fs;

use anyhow::{Context, Result};
use sheetex_extract::{extract_all, extract_sheet, extract_validated};

use crate::cli::{CheckArgs, DumpArgs};
use crate::render::{print_rows, print_sheets};
use crate::schema::{load_field_schema, load_sheet_schema};

pub fn run_dump(args: &DumpArgs) -> Result<()> {
    let bytes = fs::read(&args.workbook)
        .with_context(|| format!("read workbook: {}", args.workbook.display()))?;
    let sheets = extract_all(&bytes, args.exclude_thin_sheets)?;
    tracing::info!(sheets = sheets.len(), "workbook extracted");
    print_sheets(&sheets, args.format)
}

pub fn run_check(args: &CheckArgs) -> Result<()> {
    let bytes = fs::read(&args.workbook)
        .with_context(|| format!("read workbook: {}", args.workbook.display()))?;
    let ignore_unindicated = !args.strict;

    match args.sheet {
        Some(sheet_index) => {
            let fields = load_field_schema(&args.schema)?;
            let rows = extract_sheet(&bytes, Some(&fields), ignore_unindicated, sheet_index)?;
            tracing::info!(sheet = sheet_index, rows = rows.len(), "sheet validated");
            print_rows(&rows, args.format)
        }
        None => {
            let fields = load_sheet_schema(&args.schema)?;
            let sheets =
                extract_validated(&bytes, &fields, ignore_unindicated, args.exclude_thin_sheets)?;
            tracing::info!(sheets = sheets.len(), "workbook validated");
            print_sheets(&sheets, args.format)
        }
    }
}
