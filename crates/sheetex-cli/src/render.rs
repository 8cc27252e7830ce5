//! Output rendering: comfy-table for terminals, JSON for pipelines.

use anyhow::Result;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{ContentArrangement, Table};
use sheetex_model::{Row, SheetRows};

use crate::cli::OutputFormatArg;

pub fn print_sheets(sheets: &[SheetRows], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(sheets)?);
        }
        OutputFormatArg::Table => {
            for (position, rows) in sheets.iter().enumerate() {
                println!("Sheet {position} ({} row(s))", rows.len());
                if !rows.is_empty() {
                    println!("{}", rows_table(rows));
                }
            }
        }
    }
    Ok(())
}

pub fn print_rows(rows: &[Row], format: OutputFormatArg) -> Result<()> {
    match format {
        OutputFormatArg::Json => {
            println!("{}", serde_json::to_string_pretty(rows)?);
        }
        OutputFormatArg::Table => {
            println!("{}", rows_table(rows));
        }
    }
    Ok(())
}

fn rows_table(rows: &[Row]) -> Table {
    let columns = column_order(rows);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(columns.clone());
    for row in rows {
        table.add_row(columns.iter().map(|column| {
            row.get(column)
                .map(|value| value.to_string())
                .unwrap_or_default()
        }));
    }
    table
}

/// Union of column names across rows, in first-seen order. Rows of one sheet
/// normally agree, but ragged grids can differ per row.
fn column_order(rows: &[Row]) -> Vec<String> {
    let mut columns: Vec<String> = Vec::new();
    for row in rows {
        for name in row.columns() {
            if !columns.iter().any(|column| column == name) {
                columns.push(name.to_string());
            }
        }
    }
    columns
}
