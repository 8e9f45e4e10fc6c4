//! Error type for whole-report builds

use std::path::PathBuf;

use thiserror::Error;

/// Result type for report builds
pub type BuildResult<T> = std::result::Result<T, BuildError>;

/// Errors from loading sources and assembling a workbook
#[derive(Debug, Error)]
pub enum BuildError {
    /// Reading a manifest or source file failed
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The manifest is not valid JSON for the expected shape
    #[error("Invalid manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    /// Two tables share an id
    #[error("Duplicate table id '{0}'")]
    DuplicateTable(String),

    /// A chart names a table id the manifest does not define
    #[error("Chart '{chart}' refers to unknown table '{table}'")]
    UnknownTable { chart: String, table: String },

    /// A password environment variable is unset
    #[error("Environment variable '{0}' is not set")]
    MissingEnv(String),

    /// Core error
    #[error(transparent)]
    Core(#[from] placer_core::Error),

    /// Workbook writer error
    #[error(transparent)]
    Write(#[from] placer_xlsx::WriteError),

    /// Remote table error
    #[error(transparent)]
    Fetch(#[from] placer_fetch::FetchError),

    /// CSV error
    #[error(transparent)]
    Csv(#[from] placer_csv::CsvError),
}
