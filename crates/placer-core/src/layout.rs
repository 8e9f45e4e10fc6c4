//! Placement arithmetic
//!
//! Placing a table writes its title at the descriptor's start cell and the
//! data one row below it:
//!
//! ```text
//!   start_col
//!   v
//!   Title                         <- title_row
//!   [index] name_0 name_1 ...     <- start_row (header)
//!   0       v      v              <- start_row + 1
//!   ...
//!   n-1     v      v              <- end_row = start_row + n
//! ```
//!
//! `end_col = start_col + column_count`, which is the last written column
//! when the index is emitted and one past it otherwise.

use log::debug;

use crate::cell::{column_letter, CellAddress, CellRange};
use crate::conditional_format::ConditionalFormatRule;
use crate::error::{Error, Result};
use crate::table::TableDescriptor;

/// Where a table ended up on its sheet
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Sheet the table was written to
    pub sheet: String,
    /// Title cell row
    pub title_row: u32,
    /// Title cell column
    pub title_col: u16,
    /// Header row
    pub start_row: u32,
    /// First written column (the index column when emitted)
    pub start_col: u16,
    /// Last data row
    pub end_row: u32,
    /// `start_col + column_count`
    pub end_col: u16,
    /// Whether a leading index column was written
    pub row_index: bool,
}

impl Placement {
    /// Column holding the first dataset column
    pub fn first_data_col(&self) -> u16 {
        self.start_col + u16::from(self.row_index)
    }

    /// Sheet column of the dataset column at `position`
    pub fn data_col(&self, position: usize) -> u16 {
        let position = u16::try_from(position).unwrap_or(u16::MAX);
        self.first_data_col().saturating_add(position)
    }

    /// Whether at least one body row was written
    pub fn has_body(&self) -> bool {
        self.end_row > self.start_row
    }

    /// 1-based `(first, last)` body rows as used in A1 references
    pub fn body_rows_a1(&self) -> (u32, u32) {
        (self.start_row + 2, self.end_row + 1)
    }

    /// The exact rectangle of cells holding header, body and index.
    ///
    /// `None` when nothing but the title was written (no columns and no index).
    pub fn written_range(&self) -> Option<CellRange> {
        let last_col = if self.row_index {
            self.end_col
        } else {
            self.end_col.checked_sub(1).filter(|c| *c >= self.start_col)?
        };
        Some(CellRange::from_indices(
            self.start_row,
            self.start_col,
            self.end_row,
            last_col,
        ))
    }

    /// Everything the table occupies, title row included
    pub fn footprint(&self) -> CellRange {
        let last_col = self.written_range().map_or(self.title_col, |r| r.end.col);
        CellRange::from_indices(self.title_row, self.title_col, self.end_row, last_col)
    }

    /// Whether two placements share a sheet and any cell
    pub fn overlaps(&self, other: &Placement) -> bool {
        self.sheet == other.sheet && self.footprint().overlaps(&other.footprint())
    }
}

/// A conditional format bound to a concrete column span
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalRange {
    /// Dataset column name the rule was attached to
    pub column: String,
    /// Sheet column
    pub col: u16,
    /// Column letter
    pub letter: char,
    /// First body row (0-based)
    pub first_row: u32,
    /// Last body row (0-based)
    pub last_row: u32,
    /// The rule to apply
    pub rule: ConditionalFormatRule,
}

impl ConditionalRange {
    /// A1 form of the span, e.g. `C5:C8`
    pub fn a1_range(&self) -> String {
        format!(
            "{l}{}:{l}{}",
            self.first_row + 1,
            self.last_row + 1,
            l = self.letter
        )
    }
}

/// Everything placement needs to write, computed up front
#[derive(Debug, Clone, PartialEq)]
pub struct TableLayout {
    /// Title cell
    pub title: CellAddress,
    /// Resolved rectangle
    pub placement: Placement,
    /// Conditional formats with their spans
    pub conditional_formats: Vec<ConditionalRange>,
}

impl TableLayout {
    /// Lay a table out at its current start coordinates.
    ///
    /// Fails with [`Error::UnknownColumn`] when formatting names a column the
    /// dataset lacks and [`Error::ColumnRange`] when a formatted column lands
    /// beyond `Z`.
    pub fn compute(table: &TableDescriptor) -> Result<Self> {
        let title = CellAddress::new(table.start_row(), table.start_col());
        let start_row = table.start_row().saturating_add(1);
        let rows = u32::try_from(table.data.row_count()).unwrap_or(u32::MAX);
        let cols = u16::try_from(table.data.column_count()).unwrap_or(u16::MAX);

        let placement = Placement {
            sheet: table.sheet.clone(),
            title_row: title.row,
            title_col: title.col,
            start_row,
            start_col: table.start_col(),
            end_row: start_row.saturating_add(rows),
            end_col: table.start_col().saturating_add(cols),
            row_index: table.emit_row_index,
        };

        let mut conditional_formats = Vec::new();
        for (column, rules) in &table.formatting {
            let position =
                table
                    .data
                    .column_position(column)
                    .ok_or_else(|| Error::UnknownColumn {
                        table: table.title.clone(),
                        column: column.clone(),
                    })?;
            let col = placement.data_col(position);
            let letter = column_letter(col)?;

            if !placement.has_body() {
                debug!("table '{}' has no rows; skipping formats on '{}'", table.title, column);
                continue;
            }

            conditional_formats.extend(rules.iter().map(|rule| ConditionalRange {
                column: column.clone(),
                col,
                letter,
                first_row: placement.start_row + 1,
                last_row: placement.end_row,
                rule: rule.clone(),
            }));
        }

        Ok(Self {
            title,
            placement,
            conditional_formats,
        })
    }
}
