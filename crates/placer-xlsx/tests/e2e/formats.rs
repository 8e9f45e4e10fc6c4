//! Tests for conditional formats on placed tables.

use crate::{cell, read_part, read_sheet, revenue_table, temp_workbook_path};
use placer_core::{
    cell_shading, cell_shading_range, CellValue, Color, ConditionalFormatRule, Dataset, Error,
    TableDescriptor, ValueOperator,
};
use placer_xlsx::{WorkbookWriter, WriteError};

const SHEET_PART: &str = "xl/worksheets/sheet1.xml";

#[test]
fn test_value_rule_covers_body_rows() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let rule = cell_shading(Color::RED, Color::WHITE, ">", 11).unwrap();
    let table = revenue_table("Data").with_formatting("Revenue", vec![rule]);
    writer.place_table(&table).unwrap();
    writer.finalize().unwrap();

    let xml = read_part(&path, SHEET_PART);
    assert!(xml.contains(r#"sqref="C3:C6""#), "{xml}");
    assert!(xml.contains(r#"operator="greaterThan""#), "{xml}");
    assert!(xml.contains("<formula>11</formula>"), "{xml}");

    let styles = read_part(&path, "xl/styles.xml");
    assert!(styles.contains("FFFF0000"), "{styles}");
}

#[test]
fn test_rules_follow_reposition() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data").with_formatting(
        "Revenue",
        vec![
            ConditionalFormatRule::cell_is(ValueOperator::LessThanOrEqual, 9),
            cell_shading_range(Color::GRAY, Color::BLACK, "between", 10, 12).unwrap(),
        ],
    );
    writer.place_table_at(&mut table, 2, 3).unwrap();
    writer.finalize().unwrap();

    let xml = read_part(&path, SHEET_PART);
    // index D, Month E, Revenue F; body rows 5..=8
    assert!(xml.contains(r#"sqref="F5:F8""#), "{xml}");
    assert!(xml.contains(r#"operator="lessThanOrEqual""#), "{xml}");
    assert!(xml.contains(r#"operator="between""#), "{xml}");
    assert!(xml.contains("<formula>10</formula><formula>12</formula>"), "{xml}");
}

#[test]
fn test_boolean_and_string_operands() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let data = Dataset::from_rows(
        vec!["Region", "Active"],
        vec![
            vec!["North".into(), true.into()],
            vec!["South".into(), false.into()],
        ],
    )
    .unwrap();
    let table = TableDescriptor::new("Regions", data, "Data")
        .with_row_index(false)
        .with_formatting(
            "Active",
            vec![ConditionalFormatRule::cell_is(ValueOperator::Equal, true)],
        )
        .with_formatting(
            "Region",
            vec![ConditionalFormatRule::cell_is(ValueOperator::NotEqual, "Say \"hi\"")],
        );
    writer.place_table(&table).unwrap();
    writer.finalize().unwrap();

    let xml = read_part(&path, SHEET_PART);
    assert!(xml.contains("<formula>TRUE</formula>"), "{xml}");
    assert!(!xml.contains("<formula>\"TRUE\"</formula>"), "{xml}");
    assert!(xml.contains("<formula>\"Say \"\"hi\"\"\"</formula>"), "{xml}");
}

#[test]
fn test_unknown_column_writes_nothing() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let table = revenue_table("Data").with_formatting(
        "Profit",
        vec![ConditionalFormatRule::cell_is(ValueOperator::Equal, 1)],
    );
    let err = writer.place_table(&table).unwrap_err();
    assert!(matches!(err, WriteError::Core(Error::UnknownColumn { .. })));

    // the sheet still gets valid content from a later table
    writer.place_table(&revenue_table("Data")).unwrap();
    writer.finalize().unwrap();
    let range = read_sheet(&path, "Data");
    assert_eq!(cell(&range, 0, 0), CellValue::from("Revenue"));
    assert!(!read_part(&path, SHEET_PART).contains("conditionalFormatting"));
}

#[test]
fn test_formatted_column_past_z() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data").with_formatting(
        "Revenue",
        vec![ConditionalFormatRule::cell_is(ValueOperator::Equal, 1)],
    );
    let err = writer.place_table_at(&mut table, 0, 24).unwrap_err();
    assert!(matches!(err, WriteError::Core(Error::ColumnRange(26))));
    assert!(writer.placement(&table).is_none());
}
