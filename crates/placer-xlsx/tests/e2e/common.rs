//! Common utilities for E2E tests.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use placer_core::{CellValue, Dataset, TableDescriptor};
use tempfile::TempDir;

/// A temp directory and a workbook path inside it.
///
/// Keep the `TempDir` alive for as long as the file is needed.
pub fn temp_workbook_path() -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("out.xlsx");
    (dir, path)
}

/// The four-month revenue table used across tests
pub fn revenue() -> Dataset {
    Dataset::from_rows(
        vec!["Month", "Revenue"],
        vec![
            vec!["Jan".into(), 10.into()],
            vec!["Feb".into(), 12.into()],
            vec!["Mar".into(), 9.into()],
            vec!["Apr".into(), 15.into()],
        ],
    )
    .expect("rectangular rows")
}

pub fn revenue_table(sheet: &str) -> TableDescriptor {
    TableDescriptor::new("Revenue", revenue(), sheet)
}

/// Read one sheet's cells
pub fn read_sheet(path: &Path, sheet: &str) -> Range<Data> {
    let mut workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
    workbook
        .worksheet_range(sheet)
        .unwrap_or_else(|e| panic!("sheet '{sheet}' should exist: {e}"))
}

/// Sheet names in order
pub fn sheet_names(path: &Path) -> Vec<String> {
    let workbook: Xlsx<_> = open_workbook(path).expect("open workbook");
    workbook.sheet_names()
}

/// Cell at absolute `(row, col)` converted back to a [`CellValue`]
pub fn cell(range: &Range<Data>, row: u32, col: u32) -> CellValue {
    match range.get_value((row, col)) {
        None | Some(Data::Empty) => CellValue::Empty,
        Some(Data::String(s)) => CellValue::String(s.clone()),
        Some(Data::Float(f)) => CellValue::Number(*f),
        Some(Data::Int(i)) => CellValue::Number(*i as f64),
        Some(Data::Bool(b)) => CellValue::Boolean(*b),
        Some(other) => panic!("unexpected cell at ({row}, {col}): {other:?}"),
    }
}

/// Raw XML of one part of the package, e.g. `xl/charts/chart1.xml`
pub fn read_part(path: &Path, part: &str) -> String {
    let file = File::open(path).expect("open package");
    let mut archive = zip::ZipArchive::new(file).expect("read zip container");
    let mut entry = archive
        .by_name(part)
        .unwrap_or_else(|e| panic!("part '{part}' should exist: {e}"));
    let mut xml = String::new();
    entry.read_to_string(&mut xml).expect("utf-8 part");
    xml
}

/// Whether the package has a part with this name
pub fn has_part(path: &Path, part: &str) -> bool {
    let file = File::open(path).expect("open package");
    let archive = zip::ZipArchive::new(file).expect("read zip container");
    let found = archive.file_names().any(|name| name == part);
    found
}
