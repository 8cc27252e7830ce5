use sheetex_model::{CellValue, DataType, FieldSpec, Row, SheetFieldSpec};

#[test]
fn schema_documents_round_trip() {
    let fields = vec![
        SheetFieldSpec::new(0, FieldSpec::new("Id").required().with_type(DataType::Integer)),
        SheetFieldSpec::new(1, FieldSpec::new("Label")),
    ];
    let json = serde_json::to_string(&fields).expect("serialize schema");
    let round: Vec<SheetFieldSpec> = serde_json::from_str(&json).expect("deserialize schema");
    assert_eq!(round, fields);
}

#[test]
fn schema_type_names_are_case_insensitive() {
    let parsed: FieldSpec =
        serde_json::from_str(r#"{"column": "When", "type": "DateTime"}"#).expect("parse");
    assert_eq!(parsed.data_type, Some(DataType::DateTime));
}

#[test]
fn rows_serialize_in_column_order_with_native_values() {
    let mut row = Row::new();
    row.push("Id", CellValue::Int(7));
    row.push("Name", CellValue::text("Ada"));
    row.push("Score", CellValue::Float(9.5));
    row.push("Gap", CellValue::Null);

    let json = serde_json::to_string(&row).expect("serialize row");
    assert_eq!(json, r#"{"Id":7,"Name":"Ada","Score":9.5,"Gap":null}"#);
}

#[test]
fn data_type_labels_are_user_facing() {
    assert_eq!(DataType::Integer.label(), "integer number");
    assert_eq!(DataType::DateTime.label(), "date and time");
    assert_eq!(DataType::Integer.to_string(), "integer");
}
