//! # placer-fetch
//!
//! Download a web page and read its first `<table>` into a [`Dataset`].
//!
//! ```rust,no_run
//! use placer_fetch::fetch_table;
//!
//! let data = fetch_table("https://example.com/report.html", Some("user"), Some("secret"))?;
//! println!("{} rows", data.row_count());
//! # Ok::<(), placer_fetch::FetchError>(())
//! ```
//!
//! [`Dataset`]: placer_core::Dataset

mod error;
mod fetch;
mod html;
mod options;

pub use error::{FetchError, FetchResult};
pub use fetch::{embed_credentials, fetch_table, TableFetcher};
pub use html::parse_first_table;
pub use options::FetchOptions;
