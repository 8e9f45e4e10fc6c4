//! Tests for where tables land on their sheet.

use crate::{cell, read_sheet, revenue, revenue_table, sheet_names, temp_workbook_path};
use placer_core::{CellValue, Dataset, TableDescriptor};
use placer_xlsx::{WorkbookWriter, WriteError};
use pretty_assertions::assert_eq;

#[test]
fn test_title_header_and_body_at_offset() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data");
    let placement = writer.place_table_at(&mut table, 2, 3).unwrap();
    writer.finalize().unwrap();

    assert_eq!(placement.title_row, 2);
    assert_eq!(placement.start_row, 3);
    assert_eq!(placement.end_row, 7);
    assert_eq!(placement.end_col, 5);

    let range = read_sheet(&path, "Data");
    assert_eq!(cell(&range, 2, 3), CellValue::from("Revenue"));

    // header: blank index cell, then the column names
    assert_eq!(cell(&range, 3, 3), CellValue::Empty);
    assert_eq!(cell(&range, 3, 4), CellValue::from("Month"));
    assert_eq!(cell(&range, 3, 5), CellValue::from("Revenue"));

    for row in 0..4u32 {
        assert_eq!(cell(&range, 4 + row, 3), CellValue::Number(f64::from(row)));
    }
    assert_eq!(cell(&range, 4, 4), CellValue::from("Jan"));
    assert_eq!(cell(&range, 7, 4), CellValue::from("Apr"));
    assert_eq!(cell(&range, 4, 5), CellValue::Number(10.0));
    assert_eq!(cell(&range, 7, 5), CellValue::Number(15.0));

    // nothing past the last row
    assert_eq!(cell(&range, 8, 5), CellValue::Empty);
}

#[test]
fn test_table_without_index() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let table = revenue_table("Data").with_row_index(false);
    writer.place_table(&table).unwrap();
    writer.finalize().unwrap();

    let range = read_sheet(&path, "Data");
    assert_eq!(cell(&range, 0, 0), CellValue::from("Revenue"));
    assert_eq!(cell(&range, 1, 0), CellValue::from("Month"));
    assert_eq!(cell(&range, 1, 1), CellValue::from("Revenue"));
    assert_eq!(cell(&range, 2, 0), CellValue::from("Jan"));
    assert_eq!(cell(&range, 5, 1), CellValue::Number(15.0));
    assert_eq!(cell(&range, 1, 2), CellValue::Empty);
}

#[test]
fn test_named_index_labels() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let data = Dataset::from_rows(
        vec!["Sales"],
        vec![vec![120.into()], vec![95.into()], vec![true.into()]],
    )
    .unwrap()
    .with_index(vec!["North".into(), "South".into(), "East".into()])
    .unwrap()
    .with_index_name("Region");
    writer
        .place_table(&TableDescriptor::new("Sales by region", data, "Regions"))
        .unwrap();
    writer.finalize().unwrap();

    let range = read_sheet(&path, "Regions");
    assert_eq!(cell(&range, 1, 0), CellValue::from("Region"));
    assert_eq!(cell(&range, 1, 1), CellValue::from("Sales"));
    assert_eq!(cell(&range, 2, 0), CellValue::from("North"));
    assert_eq!(cell(&range, 4, 0), CellValue::from("East"));
    assert_eq!(cell(&range, 3, 1), CellValue::Number(95.0));
    assert_eq!(cell(&range, 4, 1), CellValue::Boolean(true));
}

#[test]
fn test_empty_cells_are_skipped() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let data = Dataset::from_rows(
        vec!["a", "b"],
        vec![
            vec![1.into(), CellValue::Empty],
            vec![CellValue::Empty, 4.into()],
        ],
    )
    .unwrap();
    writer
        .place_table(&TableDescriptor::new("Sparse", data, "S").with_row_index(false))
        .unwrap();
    writer.finalize().unwrap();

    let range = read_sheet(&path, "S");
    assert_eq!(cell(&range, 2, 0), CellValue::Number(1.0));
    assert_eq!(cell(&range, 2, 1), CellValue::Empty);
    assert_eq!(cell(&range, 3, 0), CellValue::Empty);
    assert_eq!(cell(&range, 3, 1), CellValue::Number(4.0));
}

#[test]
fn test_sheets_created_in_placement_order() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    writer.place_table(&revenue_table("Summary")).unwrap();
    let mut second = TableDescriptor::new("Again", revenue(), "Detail");
    writer.place_table_at(&mut second, 0, 0).unwrap();
    // a second table on an existing sheet reuses it
    let mut third = TableDescriptor::new("Side", revenue(), "Summary");
    writer.place_table_at(&mut third, 0, 4).unwrap();
    writer.finalize().unwrap();

    assert_eq!(sheet_names(&path), vec!["Summary".to_string(), "Detail".to_string()]);

    let range = read_sheet(&path, "Summary");
    assert_eq!(cell(&range, 0, 0), CellValue::from("Revenue"));
    assert_eq!(cell(&range, 0, 4), CellValue::from("Side"));
    assert_eq!(cell(&range, 1, 5), CellValue::from("Month"));
}

#[test]
fn test_replacing_table_moves_placement() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data");
    writer.place_table(&table).unwrap();
    let moved = writer.place_table_at(&mut table, 10, 0).unwrap();

    assert_eq!(writer.placement(&table), Some(&moved));
    assert_eq!(moved.start_row, 11);
    writer.finalize().unwrap();
}

#[test]
fn test_invalid_sheet_name_adds_no_sheet() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let too_long = "x".repeat(32);
    for bad in ["bad[name]", "a:b", too_long.as_str()] {
        let table = revenue_table(bad);
        let err = writer.place_table(&table).unwrap_err();
        assert!(matches!(err, WriteError::Xlsx(_)), "{err}");
        assert!(writer.placement(&table).is_none());
    }

    writer.place_table(&revenue_table("Good")).unwrap();
    writer.finalize().unwrap();

    assert_eq!(sheet_names(&path), vec!["Good".to_string()]);
}
