//! # placer
//!
//! Place tabular datasets, conditional formats and charts at exact cells of
//! an XLSX workbook.
//!
//! Tables carry a title, a target sheet and a start cell. Writing one puts the
//! title on the start cell and the header row directly below it. Each
//! placement is recorded, so charts added afterwards reference exactly the
//! cells their source table landed on.
//!
//! ## Features
//!
//! - Tables from inline values, CSV files or the first `<table>` of a web page
//! - Conditional formats keyed by column name
//! - Single-series charts over a table column, categorised by the row index
//!   or another column
//! - JSON manifests describing a whole report
//!
//! ## Example
//!
//! ```rust,no_run
//! use placer::prelude::*;
//!
//! let data = Dataset::from_rows(
//!     vec!["Month", "Revenue"],
//!     vec![vec!["Jan".into(), 10.into()], vec!["Feb".into(), 12.into()]],
//! )?;
//! let mut table = TableDescriptor::new("Revenue", data, "Data")
//!     .with_formatting("Revenue", vec![cell_shading(Color::RED, Color::WHITE, ">", 11)?]);
//!
//! let mut writer = WorkbookWriter::create("report.xlsx");
//! writer.place_table_at(&mut table, 2, 3)?;
//!
//! let chart = ChartDescriptor::new(&table, ChartKind::Line, "Revenue", "J2", "index", "Revenue");
//! writer.place_chart(&chart)?;
//! writer.finalize()?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod manifest;
pub mod prelude;

pub use error::{BuildError, BuildResult};
pub use manifest::{BuildSummary, ChartSpec, Manifest, RuleSpec, SourceSpec, TableSpec};

// Re-export core types
pub use placer_core::{
    cell_shading,
    cell_shading_range,
    // Cell types
    column_letter,
    CellAddress,
    CellRange,
    CellStyle,
    CellValue,
    // Conditional formatting types
    CfTest,
    Color,
    Column,
    ConditionalFormatRule,
    Criteria,
    // Tables
    Dataset,
    // Error types
    Error,
    // Layout types
    Placement,
    RangeOperator,
    Result,
    TableDescriptor,
    TableId,
    TableLayout,
    ValueOperator,
};

// Re-export chart types
pub use placer_chart::{CategorySource, ChartDescriptor, ChartKind, ResolvedChart, SeriesReference};

// Re-export I/O types
pub use placer_csv::{CsvError, CsvReadOptions, CsvReader, CsvWriteOptions, CsvWriter};
pub use placer_fetch::{
    embed_credentials, fetch_table, parse_first_table, FetchError, FetchOptions, TableFetcher,
};
pub use placer_xlsx::{FinalizeError, WorkbookWriter, WriteError};
