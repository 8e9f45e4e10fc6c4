//! CSV error types

use thiserror::Error;

/// Result type for CSV operations
pub type CsvResult<T> = std::result::Result<T, CsvError>;

/// Errors that can occur during CSV operations
#[derive(Debug, Error)]
pub enum CsvError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV library error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The configured index column does not exist
    #[error("Index column {index} is out of range for {width} columns")]
    IndexColumn { index: usize, width: usize },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] placer_core::Error),
}
