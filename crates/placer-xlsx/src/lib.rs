//! # placer-xlsx
//!
//! XLSX workbook writer for placer. Tables are written at their descriptor's
//! coordinates and charts are drawn from the cells those tables landed on.

pub mod error;
pub mod writer;

pub use error::{FinalizeError, WriteError, WriteResult};
pub use writer::WorkbookWriter;
