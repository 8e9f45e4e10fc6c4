//! End-to-end tests for placer-xlsx.
//!
//! Each test builds a workbook in a temp directory, finalizes it, then reads
//! it back: cell values through `calamine` and package parts (conditional
//! formats, chart XML) straight out of the zip container.

mod charts;
mod common;
mod finalize;
mod formats;
mod tables;

// Re-export common utilities for submodules
pub use common::*;
