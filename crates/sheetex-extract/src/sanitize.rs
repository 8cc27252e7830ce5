//! Blank-row removal.

use crate::workbook::Sheet;

/// Remove every row whose cells are all blank, wherever it occurs,
/// preserving the relative order of the remaining rows. Runs before header
/// selection: row 0 of a sanitized sheet is the intended header.
pub fn sanitize(sheet: &mut Sheet) {
    sheet
        .rows
        .retain(|row| row.iter().any(|cell| !cell.is_blank()));
}

#[cfg(test)]
mod tests {
    use sheetex_model::CellValue;

    use super::*;

    fn text(value: &str) -> CellValue {
        CellValue::text(value)
    }

    #[test]
    fn drops_embedded_and_trailing_blank_rows() {
        let mut sheet = Sheet::new(
            0,
            "data",
            vec![
                vec![text("A"), text("B")],
                vec![CellValue::Null, text("  ")],
                vec![text("1"), text("x")],
                vec![],
                vec![text("2"), CellValue::Null],
                vec![CellValue::Null, CellValue::Null],
            ],
        );
        sanitize(&mut sheet);

        assert_eq!(sheet.rows.len(), 3);
        assert_eq!(sheet.rows[0][0], text("A"));
        assert_eq!(sheet.rows[1][0], text("1"));
        assert_eq!(sheet.rows[2][0], text("2"));
    }

    #[test]
    fn numeric_zero_is_not_blank() {
        let mut sheet = Sheet::new(0, "data", vec![vec![CellValue::Int(0)]]);
        sanitize(&mut sheet);
        assert_eq!(sheet.rows.len(), 1);
    }
}
