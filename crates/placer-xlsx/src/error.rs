//! Error types for the workbook writer

use rust_xlsxwriter::XlsxError;
use thiserror::Error;

/// Result type for writer operations
pub type WriteResult<T> = std::result::Result<T, WriteError>;

/// Errors that can occur while placing content or saving the workbook
#[derive(Debug, Error)]
pub enum WriteError {
    /// Layout or reference error
    #[error(transparent)]
    Core(#[from] placer_core::Error),

    /// Error raised by the XLSX encoder
    #[error("XLSX error: {0}")]
    Xlsx(#[from] XlsxError),

    /// Saving or closing the workbook failed
    #[error(transparent)]
    Finalize(#[from] FinalizeError),
}

/// Errors from flushing and releasing the workbook
#[derive(Debug, Error)]
pub enum FinalizeError {
    /// The workbook was already saved and released
    #[error("Workbook '{0}' has already been finalized")]
    AlreadyFinalized(String),

    /// Writing the file failed
    #[error("Failed to save workbook '{path}': {source}")]
    Save {
        path: String,
        #[source]
        source: XlsxError,
    },
}
