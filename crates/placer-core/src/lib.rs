//! # placer-core
//!
//! Core data structures for the placer library.
//!
//! This crate provides the types that describe *what* goes on a sheet and
//! *where*:
//! - [`Dataset`] - Ordered named columns of equal length
//! - [`TableDescriptor`] - A dataset plus title, sheet, row index flag and formats
//! - [`ConditionalFormatRule`] - A cell-value test and the style it applies
//! - [`TableLayout`] and [`Placement`] - The rectangle a table occupies once placed
//! - [`column_letter`] - Column index to letter mapping (`A`..`Z`)
//!
//! ## Example
//!
//! ```rust
//! use placer_core::{Dataset, TableDescriptor};
//!
//! let data = Dataset::from_rows(
//!     vec!["Month", "Revenue"],
//!     vec![vec!["Jan".into(), 10.into()], vec!["Feb".into(), 12.into()]],
//! )
//! .unwrap();
//!
//! let mut table = TableDescriptor::new("Revenue", data, "Data");
//! table.reposition(2, 3);
//! assert_eq!((table.end_row(), table.end_col()), (4, 5));
//!
//! let layout = table.layout().unwrap();
//! assert_eq!(layout.placement.start_row, 3); // header sits below the title
//! ```

pub mod cell;
pub mod conditional_format;
pub mod dataset;
pub mod error;
pub mod layout;
pub mod style;
pub mod table;

// Re-exports for convenience
pub use cell::{column_letter, quote_sheet_name, CellAddress, CellRange, CellValue};
pub use conditional_format::{
    cell_shading, cell_shading_range, CfTest, ConditionalFormatRule, Criteria, RangeOperator,
    ValueOperator,
};
pub use dataset::{Column, Dataset};
pub use error::{Error, Result};
pub use layout::{ConditionalRange, Placement, TableLayout};
pub use style::{CellStyle, Color};
pub use table::{TableDescriptor, TableId};

/// Maximum number of rows in a worksheet (Excel limit)
pub const MAX_ROWS: u32 = 1_048_576;

/// Maximum number of columns in a worksheet (Excel limit)
pub const MAX_COLS: u16 = 16_384;
