//! Cell-related types and utilities
//!
//! This module contains:
//! - [`CellValue`] - The scalar held by a dataset cell
//! - [`CellAddress`] - A cell's location (e.g., "A1")
//! - [`CellRange`] - A rectangle of cells (e.g., "A1:B10")
//! - [`column_letter`] - The single-letter column mapping used by generated references

mod address;
mod value;

pub use address::{column_letter, quote_sheet_name, CellAddress, CellRange};
pub use value::CellValue;
