//! Error types for placer-core

use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while describing or laying out tables
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid cell address format
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Column index has no single-letter name
    #[error("Column index {0} is beyond column Z; only single-letter columns are supported")]
    ColumnRange(u32),

    /// A formatting rule or chart names a column the dataset does not have
    #[error("Table '{table}' has no column named '{column}'")]
    UnknownColumn { table: String, column: String },

    /// A chart uses the row index for categories but the table does not write one
    #[error("Table '{0}' was placed without a row index column")]
    IndexNotEmitted(String),

    /// A chart references a table with no body rows
    #[error("Table '{0}' has no rows to chart")]
    EmptySeries(String),

    /// A chart was placed before its source table
    #[error("Table '{0}' must be placed before charts that reference it")]
    PlacementOrder(String),

    /// Columns (or the row index) have different lengths
    #[error("Column '{column}' has {actual} values, expected {expected}")]
    RaggedColumns {
        column: String,
        expected: usize,
        actual: usize,
    },

    /// Unrecognised conditional format criteria
    #[error("Invalid conditional format criteria: {0}")]
    InvalidCriteria(String),

    /// Unparseable colour
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// Unrecognised chart kind
    #[error("Unknown chart kind: {0}")]
    InvalidChartKind(String),
}
