//! Tests for charts drawn from placed tables.

use crate::{has_part, read_part, revenue_table, temp_workbook_path};
use placer_chart::{ChartDescriptor, ChartKind};
use placer_core::{Dataset, Error, TableDescriptor};
use placer_xlsx::{WorkbookWriter, WriteError};
use pretty_assertions::assert_eq;

const CHART_PART: &str = "xl/charts/chart1.xml";

#[test]
fn test_chart_references_placed_cells() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data");
    writer.place_table_at(&mut table, 2, 3).unwrap();

    let chart = ChartDescriptor::new(&table, ChartKind::Line, "Revenue", "J2", "index", "Revenue");
    let resolved = writer.place_chart(&chart).unwrap();
    writer.finalize().unwrap();

    assert_eq!(resolved.categories.to_string(), "=Data!$D$5:$D$8");
    assert_eq!(resolved.values.to_string(), "=Data!$F$5:$F$8");

    let xml = read_part(&path, CHART_PART);
    assert!(xml.contains("<c:lineChart>"), "{xml}");
    assert!(xml.contains("<c:f>Data!$D$5:$D$8</c:f>"), "{xml}");
    assert!(xml.contains("<c:f>Data!$F$5:$F$8</c:f>"), "{xml}");

    let drawing = read_part(&path, "xl/drawings/drawing1.xml");
    // anchored at J2: column 9, row 1
    assert!(drawing.contains("<xdr:col>9</xdr:col>"), "{drawing}");
    assert!(drawing.contains("<xdr:row>1</xdr:row>"), "{drawing}");
}

#[test]
fn test_chart_uses_position_at_placement_time() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let mut table = revenue_table("Data").with_row_index(false);
    writer.place_table(&table).unwrap();
    // moving the descriptor afterwards does not move the written cells
    table.reposition(20, 20);

    let chart = ChartDescriptor::new(&table, ChartKind::Column, "Revenue", "E2", "Month", "Revenue");
    let resolved = writer.place_chart(&chart).unwrap();
    writer.finalize().unwrap();

    assert_eq!(resolved.categories.range(), "Data!$A$3:$A$6");
    assert_eq!(resolved.values.range(), "Data!$B$3:$B$6");
    assert!(read_part(&path, CHART_PART).contains("<c:barChart>"));
}

#[test]
fn test_quoted_sheet_reference() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let table = revenue_table("Q1 Data");
    writer.place_table(&table).unwrap();
    let chart = ChartDescriptor::new(&table, ChartKind::Pie, "Share", "F2", "Month", "Revenue");
    let resolved = writer.place_chart(&chart).unwrap();
    writer.finalize().unwrap();

    assert_eq!(resolved.values.range(), "'Q1 Data'!$C$3:$C$6");
    assert!(read_part(&path, CHART_PART).contains("<c:f>'Q1 Data'!$C$3:$C$6</c:f>"));
}

#[test]
fn test_cell_like_sheet_name_is_quoted() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let table = revenue_table("Q1").with_row_index(false);
    writer.place_table(&table).unwrap();
    let chart = ChartDescriptor::new(&table, ChartKind::Column, "Q1", "E2", "Month", "Revenue");
    let resolved = writer.place_chart(&chart).unwrap();
    writer.finalize().unwrap();

    assert_eq!(resolved.categories.to_string(), "='Q1'!$A$3:$A$6");
    assert_eq!(resolved.values.range(), "'Q1'!$B$3:$B$6");
    let xml = read_part(&path, CHART_PART);
    assert!(xml.contains("<c:f>'Q1'!$A$3:$A$6</c:f>"), "{xml}");
    assert!(xml.contains("<c:f>'Q1'!$B$3:$B$6</c:f>"), "{xml}");
}

#[test]
fn test_chart_before_placement() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let table = revenue_table("Data");
    let chart = ChartDescriptor::new(&table, ChartKind::Line, "Revenue", "J2", "index", "Revenue");
    let err = writer.place_chart(&chart).unwrap_err();
    assert!(matches!(err, WriteError::Core(Error::PlacementOrder(ref t)) if t == "Revenue"));

    writer.place_table(&table).unwrap();
    writer.place_chart(&chart).unwrap();
    writer.finalize().unwrap();
    assert!(has_part(&path, CHART_PART));
}

#[test]
fn test_chart_resolution_errors() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    let no_index = revenue_table("Data").with_row_index(false);
    writer.place_table(&no_index).unwrap();
    let chart = ChartDescriptor::new(&no_index, ChartKind::Line, "R", "J2", "index", "Revenue");
    assert!(matches!(
        writer.place_chart(&chart).unwrap_err(),
        WriteError::Core(Error::IndexNotEmitted(_))
    ));

    let empty = TableDescriptor::new(
        "Empty",
        Dataset::from_rows(vec!["v"], Vec::new()).unwrap(),
        "Other",
    );
    writer.place_table(&empty).unwrap();
    let chart = ChartDescriptor::new(&empty, ChartKind::Line, "E", "J2", "index", "v");
    assert!(matches!(
        writer.place_chart(&chart).unwrap_err(),
        WriteError::Core(Error::EmptySeries(_))
    ));

    writer.finalize().unwrap();
    assert!(!has_part(&path, CHART_PART));
}
