//! Prelude module - common imports for placer users
//!
//! ```rust
//! use placer::prelude::*;
//! ```

pub use crate::{
    // Conditional formatting
    cell_shading,
    cell_shading_range,
    CellStyle,
    // Cell types
    CellValue,
    // Chart types
    ChartDescriptor,
    ChartKind,
    Color,
    ConditionalFormatRule,

    // I/O types
    CsvReader,
    CsvWriter,
    // Tables
    Dataset,
    // Error types
    Error,
    Manifest,
    Placement,
    Result,
    TableDescriptor,
    TableFetcher,
    ValueOperator,

    WorkbookWriter,
};
