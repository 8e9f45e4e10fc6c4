//! Tests for saving and releasing the workbook.

use crate::{revenue_table, temp_workbook_path};
use placer_xlsx::{FinalizeError, WorkbookWriter, WriteError};

#[test]
fn test_nothing_written_before_finalize() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);

    writer.place_table(&revenue_table("Data")).unwrap();
    assert!(!path.exists());
    assert!(!writer.is_finalized());

    writer.finalize().unwrap();
    assert!(path.exists());
    assert!(writer.is_finalized());
}

#[test]
fn test_finalize_twice() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);
    writer.place_table(&revenue_table("Data")).unwrap();
    writer.finalize().unwrap();

    assert!(matches!(
        writer.finalize().unwrap_err(),
        WriteError::Finalize(FinalizeError::AlreadyFinalized(_))
    ));
}

#[test]
fn test_place_after_finalize() {
    let (_dir, path) = temp_workbook_path();
    let mut writer = WorkbookWriter::create(&path);
    writer.place_table(&revenue_table("Data")).unwrap();
    writer.finalize().unwrap();

    assert!(matches!(
        writer.place_table(&revenue_table("Data")).unwrap_err(),
        WriteError::Finalize(FinalizeError::AlreadyFinalized(_))
    ));
}

#[test]
fn test_save_into_missing_directory() {
    let (dir, _) = temp_workbook_path();
    let path = dir.path().join("missing").join("out.xlsx");
    let mut writer = WorkbookWriter::create(&path);
    writer.place_table(&revenue_table("Data")).unwrap();

    match writer.finalize() {
        Err(WriteError::Finalize(FinalizeError::Save { path: failed, .. })) => {
            assert!(failed.ends_with("out.xlsx"));
        }
        other => panic!("expected a save error, got {other:?}"),
    }
    // the workbook is released even when saving fails
    assert!(writer.is_finalized());
}
