//! # placer-chart
//!
//! Chart descriptors for placer. A [`ChartDescriptor`] names a placed table
//! and the columns feeding one series; resolving it against the table's
//! [`Placement`](placer_core::Placement) yields absolute [`SeriesReference`]s.

mod chart;
mod series;

pub use chart::{ChartDescriptor, ChartKind, ResolvedChart};
pub use series::{CategorySource, SeriesReference};
