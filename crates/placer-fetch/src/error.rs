//! Fetch error types

use thiserror::Error;

/// Result type for fetch operations
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors that can occur while downloading or parsing a table
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport failure, timeout or TLS error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The response is not an HTML document
    #[error("{url} returned '{content_type}', expected HTML")]
    NotHtml { url: String, content_type: String },

    /// The document has no `<table>` element
    #[error("No table found in document")]
    NoTable,

    /// The URL could not be parsed
    #[error("Invalid URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Core error
    #[error("Core error: {0}")]
    Core(#[from] placer_core::Error),
}
