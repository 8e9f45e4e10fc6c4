//! Table descriptors
//!
//! A [`TableDescriptor`] wraps a [`Dataset`] with the metadata needed to put
//! it on a sheet: a title, the sheet name, whether to emit the row index,
//! per-column conditional formats, and its current start/end coordinates.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::conditional_format::ConditionalFormatRule;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::layout::TableLayout;

static NEXT_TABLE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a table descriptor, used to look up where it was placed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TableId(u64);

impl TableId {
    fn next() -> Self {
        TableId(NEXT_TABLE_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// A dataset plus its placement metadata
#[derive(Debug)]
pub struct TableDescriptor {
    id: TableId,
    /// Title written on the row above the header
    pub title: String,
    /// The tabular data
    pub data: Dataset,
    /// Target sheet name
    pub sheet: String,
    /// Whether a leading row-index column is written
    pub emit_row_index: bool,
    /// Conditional formats keyed by column name
    pub formatting: BTreeMap<String, Vec<ConditionalFormatRule>>,
    start_row: u32,
    start_col: u16,
    end_row: u32,
    end_col: u16,
}

impl TableDescriptor {
    /// Create a descriptor at (0, 0) that emits the row index
    pub fn new<T: Into<String>, S: Into<String>>(title: T, data: Dataset, sheet: S) -> Self {
        let mut table = Self {
            id: TableId::next(),
            title: title.into(),
            data,
            sheet: sheet.into(),
            emit_row_index: true,
            formatting: BTreeMap::new(),
            start_row: 0,
            start_col: 0,
            end_row: 0,
            end_col: 0,
        };
        table.reposition(0, 0);
        table
    }

    /// Set whether the row-index column is written
    pub fn with_row_index(mut self, emit: bool) -> Self {
        self.emit_row_index = emit;
        self
    }

    /// Attach conditional formats to a column.
    ///
    /// Column names are not checked here; an unknown name fails when the table is laid out.
    pub fn with_formatting<S: Into<String>>(
        mut self,
        column: S,
        rules: Vec<ConditionalFormatRule>,
    ) -> Self {
        self.formatting.entry(column.into()).or_default().extend(rules);
        self
    }

    /// Stable identity of this descriptor
    pub fn id(&self) -> TableId {
        self.id
    }

    /// Overwrite the start coordinates and recompute the end from the data shape
    pub fn reposition(&mut self, start_row: u32, start_col: u16) {
        self.start_row = start_row;
        self.start_col = start_col;
        self.end_row = start_row.saturating_add(self.height());
        self.end_col = start_col.saturating_add(self.width());
    }

    /// Compute where placement at the current start would put everything
    pub fn layout(&self) -> Result<TableLayout> {
        TableLayout::compute(self)
    }

    pub fn start_row(&self) -> u32 {
        self.start_row
    }

    pub fn start_col(&self) -> u16 {
        self.start_col
    }

    pub fn end_row(&self) -> u32 {
        self.end_row
    }

    pub fn end_col(&self) -> u16 {
        self.end_col
    }

    fn height(&self) -> u32 {
        u32::try_from(self.data.row_count()).unwrap_or(u32::MAX)
    }

    fn width(&self) -> u16 {
        u16::try_from(self.data.column_count()).unwrap_or(u16::MAX)
    }
}
