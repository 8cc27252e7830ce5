use serde::Deserialize;
use sheetex_extract::{
    RecordFields, Sheet, Workbook, extract_all, extract_workbook, extract_workbook_sheet,
    extract_workbook_sheet_as, extract_workbook_validated,
};
use sheetex_model::{CellValue, DataType, ExtractError, FieldSpec, SheetFieldSpec};

fn text(value: &str) -> CellValue {
    CellValue::text(value)
}

fn sheet(index: usize, rows: Vec<Vec<CellValue>>) -> Sheet {
    Sheet::new(index, format!("Sheet{}", index + 1), rows)
}

fn workbook(sheets: Vec<Sheet>) -> Workbook {
    Workbook { sheets }
}

fn two_column_sheet(index: usize) -> Sheet {
    sheet(
        index,
        vec![
            vec![text("A"), text("B")],
            vec![text("1"), text("x")],
            vec![text("2"), text("y")],
        ],
    )
}

#[test]
fn extracts_all_sheets_without_schema() {
    let wb = workbook(vec![
        sheet(0, vec![vec![text("A")]]),
        sheet(1, vec![]),
        sheet(
            2,
            vec![vec![text("Name")], vec![text("third sheet value")]],
        ),
    ]);

    let result = extract_workbook(wb, false).expect("extract");
    assert_eq!(result.len(), 3);
    assert!(result[0].is_empty());
    assert!(result[1].is_empty());
    assert_eq!(result[2].len(), 1);
    assert_eq!(
        result[2][0].get("Name"),
        Some(&text("third sheet value"))
    );
}

#[test]
fn excludes_sheets_without_data_rows() {
    let wb = workbook(vec![
        sheet(0, vec![vec![text("A")]]),
        sheet(1, vec![]),
        sheet(2, vec![vec![text("Name")], vec![text("v")]]),
    ]);

    let result = extract_workbook(wb, true).expect("extract");
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].len(), 1);
}

#[test]
fn multi_sheet_schema_scopes_fields_per_sheet() {
    let wb = workbook(vec![
        two_column_sheet(0),
        sheet(
            1,
            vec![
                vec![text("Code"), text("Label")],
                vec![text("5"), text("fifth value")],
            ],
        ),
    ]);
    let fields = vec![
        SheetFieldSpec::new(0, FieldSpec::new("A").required().with_type(DataType::Integer)),
        SheetFieldSpec::new(1, FieldSpec::new("Label").required().with_type(DataType::String)),
    ];

    let result = extract_workbook_validated(wb, &fields, true, false).expect("extract");
    assert_eq!(result.len(), 2);
    // Sheet 0: column A converted to integer, B dropped by ignore mode.
    assert_eq!(result[0][0].get("A"), Some(&CellValue::Int(1)));
    assert_eq!(result[0][0].get("B"), None);
    // Sheet 1: only Label retained.
    assert_eq!(result[1][0].get("Label"), Some(&text("fifth value")));
    assert_eq!(result[1][0].get("Code"), None);
}

#[test]
fn sheets_without_scoped_fields_extract_unvalidated() {
    let wb = workbook(vec![two_column_sheet(0), two_column_sheet(1)]);
    let fields = vec![SheetFieldSpec::new(
        0,
        FieldSpec::new("A").with_type(DataType::Integer),
    )];

    let result = extract_workbook_validated(wb, &fields, true, false).expect("extract");
    // Sheet 1 has no scoped fields: both columns come through untouched.
    assert_eq!(result[1][0].get("A"), Some(&text("1")));
    assert_eq!(result[1][0].get("B"), Some(&text("x")));
}

#[test]
fn schema_referencing_unknown_sheet_fails_before_extraction() {
    // Sheet 0 holds an orphan value that would fail row extraction; the
    // out-of-range schema entry must win because it is checked first.
    let wb = workbook(vec![
        sheet(
            0,
            vec![
                vec![CellValue::Null, text("B")],
                vec![text("orphan"), text("x")],
            ],
        ),
        two_column_sheet(1),
    ]);
    let fields = vec![SheetFieldSpec::new(5, FieldSpec::new("A"))];

    let error = extract_workbook_validated(wb, &fields, true, false).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::SheetIndexOutOfRange {
            index: 5,
            sheet_count: 2
        }
    ));
}

#[test]
fn workbook_with_no_data_anywhere_is_an_error() {
    let wb = workbook(vec![
        sheet(0, vec![vec![text("A")]]),
        sheet(1, vec![]),
    ]);
    let error = extract_workbook(wb, false).unwrap_err();
    assert!(matches!(error, ExtractError::NoData));

    let wb = workbook(vec![sheet(0, vec![vec![text("A")]])]);
    let error = extract_workbook(wb, true).unwrap_err();
    assert!(matches!(error, ExtractError::NoData));
}

#[test]
fn blank_rows_are_stripped_before_extraction() {
    let wb = workbook(vec![sheet(
        0,
        vec![
            vec![CellValue::Null, CellValue::Null],
            vec![text("A"), text("B")],
            vec![text("  "), CellValue::Null],
            vec![text("1"), text("x")],
        ],
    )]);

    let result = extract_workbook(wb, false).expect("extract");
    // The leading blank row is removed, so the first non-blank row becomes
    // the header and exactly one data row remains.
    assert_eq!(result[0].len(), 1);
    assert_eq!(result[0][0].get("A"), Some(&text("1")));
}

#[test]
fn ignore_mode_drops_unindicated_column_and_converts() {
    // Header [A, B], one data row [1, x], schema requires integer A.
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("A"), text("B")], vec![text("1"), text("x")]],
    )]);
    let fields = vec![FieldSpec::new("A").required().with_type(DataType::Integer)];

    let rows = extract_workbook_sheet(wb, Some(&fields), true, 0).expect("extract");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].len(), 1);
    assert_eq!(rows[0].get("A"), Some(&CellValue::Int(1)));
}

#[test]
fn repeated_header_names_are_rejected() {
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("A"), text("A")], vec![text("1"), text("2")]],
    )]);
    let fields = vec![FieldSpec::new("A")];

    let error = extract_workbook_sheet(wb, Some(&fields), true, 0).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::RepeatedColumns { ref names } if names == &vec!["A".to_string()]
    ));
}

#[test]
fn missing_schema_column_is_rejected() {
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("A")], vec![text("1")]],
    )]);
    let fields = vec![FieldSpec::new("A"), FieldSpec::new("Total")];

    let error = extract_workbook_sheet(wb, Some(&fields), true, 0).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::MissingColumns { ref names } if names == &vec!["Total".to_string()]
    ));
}

#[test]
fn undeclared_column_is_rejected_in_strict_mode() {
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("A"), text("Extra")], vec![text("1"), text("2")]],
    )]);
    let fields = vec![FieldSpec::new("A")];

    let error = extract_workbook_sheet(wb, Some(&fields), false, 0).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::UnexpectedColumns { ref names } if names == &vec!["Extra".to_string()]
    ));
}

#[test]
fn value_under_blank_header_is_fatal() {
    let wb = workbook(vec![sheet(
        0,
        vec![
            vec![text("A"), CellValue::Null],
            vec![text("1"), text("stray")],
        ],
    )]);

    let error = extract_workbook_sheet(wb, None, true, 0).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::OrphanValue { ref column } if column == "B"
    ));
}

#[test]
fn required_field_with_blank_cell_is_rejected() {
    let wb = workbook(vec![sheet(
        0,
        vec![
            vec![text("Id"), text("Note")],
            vec![CellValue::Null, text("present")],
        ],
    )]);
    let fields = vec![FieldSpec::new("Id").required(), FieldSpec::new("Note")];

    let error = extract_workbook_sheet(wb, Some(&fields), true, 0).unwrap_err();
    assert!(matches!(
        error,
        ExtractError::RequiredField { ref column } if column == "Id"
    ));
}

#[test]
fn type_mismatch_names_column_and_expected_type() {
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("Id")], vec![text("abc")]],
    )]);
    let fields = vec![FieldSpec::new("Id").with_type(DataType::Integer)];

    let error = extract_workbook_sheet(wb, Some(&fields), true, 0).unwrap_err();
    assert_eq!(
        error.to_string(),
        "values in column 'Id' must be integer number"
    );
}

#[test]
fn header_matches_schema_case_insensitively() {
    let wb = workbook(vec![sheet(
        0,
        vec![vec![text("user id")], vec![text("9")]],
    )]);
    let fields = vec![FieldSpec::new("USER ID").required().with_type(DataType::Integer)];

    let rows = extract_workbook_sheet(wb, Some(&fields), false, 0).expect("extract");
    // Keys keep the casing found in the header, not the schema's.
    assert_eq!(rows[0].get("user id"), Some(&CellValue::Int(9)));
}

#[test]
fn single_sheet_row_count_policies() {
    let error = extract_workbook_sheet(workbook(vec![sheet(0, vec![])]), None, true, 0)
        .unwrap_err();
    assert!(matches!(error, ExtractError::EmptySheet { index: 0 }));

    let error = extract_workbook_sheet(
        workbook(vec![sheet(0, vec![vec![text("A")]])]),
        None,
        true,
        0,
    )
    .unwrap_err();
    assert!(matches!(error, ExtractError::HeaderOnly { index: 0 }));

    let error = extract_workbook_sheet(workbook(vec![two_column_sheet(0)]), None, true, 3)
        .unwrap_err();
    assert!(matches!(
        error,
        ExtractError::SheetIndexOutOfRange {
            index: 3,
            sheet_count: 1
        }
    ));
}

#[test]
fn unreadable_bytes_are_an_unsupported_format() {
    let error = extract_all(b"definitely not a workbook", false).unwrap_err();
    assert!(matches!(error, ExtractError::UnsupportedFormat));
}

#[derive(Debug, Deserialize, PartialEq)]
struct Measurement {
    #[serde(rename = "Id")]
    id: i64,
    #[serde(rename = "Note", default)]
    note: Option<String>,
}

impl RecordFields for Measurement {
    fn record_fields() -> Vec<FieldSpec> {
        vec![
            FieldSpec::new("Id").required().with_type(DataType::Integer),
            FieldSpec::new("Note"),
        ]
    }
}

#[test]
fn binds_sheet_rows_to_records_with_derived_schema() {
    let wb = workbook(vec![sheet(
        0,
        vec![
            vec![text("Id"), text("Note"), text("Ignored")],
            vec![text("1"), text("first"), text("zzz")],
            vec![text("2"), CellValue::Null, text("zzz")],
        ],
    )]);

    let records: Vec<Measurement> =
        extract_workbook_sheet_as(wb, None, true, 0).expect("extract records");
    assert_eq!(
        records[0],
        Measurement {
            id: 1,
            note: Some("first".to_string())
        }
    );
    assert_eq!(records[1], Measurement { id: 2, note: None });
}

#[test]
fn binds_with_explicit_fields_on_a_later_sheet() {
    let wb = workbook(vec![
        two_column_sheet(0),
        sheet(
            1,
            vec![
                vec![text("Id"), text("Note")],
                vec![CellValue::Int(5), text("fifth value")],
            ],
        ),
    ]);
    let fields = vec![
        FieldSpec::new("Id").required().with_type(DataType::Integer),
        FieldSpec::new("Note").with_type(DataType::String),
    ];

    let records: Vec<Measurement> =
        extract_workbook_sheet_as(wb, Some(&fields), false, 1).expect("extract records");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].id, 5);
    assert_eq!(records[0].note.as_deref(), Some("fifth value"));
}

#[derive(Debug, Deserialize)]
struct Unbound {
    #[serde(rename = "Id", default)]
    _id: Option<i64>,
}

impl RecordFields for Unbound {
    fn record_fields() -> Vec<FieldSpec> {
        Vec::new()
    }
}

#[test]
fn record_without_declared_fields_fails_before_reading_rows() {
    let wb = workbook(vec![two_column_sheet(0)]);
    let error = extract_workbook_sheet_as::<Unbound>(wb, None, true, 0).unwrap_err();
    assert!(matches!(error, ExtractError::MissingFieldDeclaration { .. }));
}

#[test]
fn datetime_fields_convert_from_text() {
    let wb = workbook(vec![sheet(
        0,
        vec![
            vec![text("When")],
            vec![text("2024-06-01T08:15:00")],
        ],
    )]);
    let fields = vec![FieldSpec::new("When").with_type(DataType::DateTime)];

    let rows = extract_workbook_sheet(wb, Some(&fields), false, 0).expect("extract");
    match rows[0].get("When") {
        Some(CellValue::DateTime(when)) => {
            assert_eq!(when.format("%Y-%m-%d %H:%M").to_string(), "2024-06-01 08:15");
        }
        other => panic!("expected datetime, got {other:?}"),
    }
}
