//! # placer-csv
//!
//! Read CSV into a placer [`Dataset`](placer_core::Dataset) and write one back out.

mod error;
mod options;
mod reader;
mod writer;

pub use error::{CsvError, CsvResult};
pub use options::{CsvReadOptions, CsvWriteOptions, LineTerminator};
pub use reader::CsvReader;
pub use writer::CsvWriter;
