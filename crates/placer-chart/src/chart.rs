//! Chart types

use std::fmt;
use std::str::FromStr;

use placer_core::{CellAddress, Error, Placement, Result, TableDescriptor};

use crate::series::{CategorySource, SeriesReference};

/// Chart types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    // Column/Bar
    Column,
    ColumnStacked,
    Bar,
    BarStacked,

    // Line
    Line,

    // Pie
    Pie,
    Doughnut,

    // Area
    Area,
    AreaStacked,

    // Other
    Scatter,
    Radar,
}

impl ChartKind {
    /// Name accepted by [`FromStr`]
    pub fn name(&self) -> &'static str {
        match self {
            ChartKind::Column => "column",
            ChartKind::ColumnStacked => "column_stacked",
            ChartKind::Bar => "bar",
            ChartKind::BarStacked => "bar_stacked",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
            ChartKind::Area => "area",
            ChartKind::AreaStacked => "area_stacked",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar => "radar",
        }
    }
}

impl FromStr for ChartKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let kind = match s.trim().to_ascii_lowercase().replace([' ', '-'], "_").as_str() {
            "column" => ChartKind::Column,
            "column_stacked" | "stacked_column" => ChartKind::ColumnStacked,
            "bar" => ChartKind::Bar,
            "bar_stacked" | "stacked_bar" => ChartKind::BarStacked,
            "line" => ChartKind::Line,
            "pie" => ChartKind::Pie,
            "doughnut" | "donut" => ChartKind::Doughnut,
            "area" => ChartKind::Area,
            "area_stacked" | "stacked_area" => ChartKind::AreaStacked,
            "scatter" => ChartKind::Scatter,
            "radar" => ChartKind::Radar,
            _ => return Err(Error::InvalidChartKind(s.to_string())),
        };
        Ok(kind)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A chart drawn from two columns of an already placed table
#[derive(Debug, Clone)]
pub struct ChartDescriptor<'a> {
    /// Table the series reads from
    pub source: &'a TableDescriptor,
    /// Chart type
    pub kind: ChartKind,
    /// Series name
    pub name: String,
    /// Top-left cell of the chart, e.g. `"H2"`
    pub anchor_cell: String,
    /// Category (X) data
    pub category_column: CategorySource,
    /// Value (Y) column name
    pub value_column: String,
}

impl<'a> ChartDescriptor<'a> {
    /// Describe a single-series chart
    pub fn new(
        source: &'a TableDescriptor,
        kind: ChartKind,
        name: impl Into<String>,
        anchor_cell: impl Into<String>,
        category_column: impl Into<CategorySource>,
        value_column: impl Into<String>,
    ) -> Self {
        Self {
            source,
            kind,
            name: name.into(),
            anchor_cell: anchor_cell.into(),
            category_column: category_column.into(),
            value_column: value_column.into(),
        }
    }

    /// Resolve series references against where the source table was placed
    pub fn resolve(&self, placement: &Placement) -> Result<ResolvedChart> {
        let table = &self.source.title;
        if !placement.has_body() {
            return Err(Error::EmptySeries(table.clone()));
        }

        let category_col = match &self.category_column {
            CategorySource::Index if placement.row_index => placement.start_col,
            CategorySource::Index => return Err(Error::IndexNotEmitted(table.clone())),
            CategorySource::Column(name) => placement.data_col(self.position(name)?),
        };
        let value_col = placement.data_col(self.position(&self.value_column)?);

        let (first_row, last_row) = placement.body_rows_a1();
        Ok(ResolvedChart {
            kind: self.kind,
            name: self.name.clone(),
            anchor: CellAddress::parse(&self.anchor_cell)?,
            categories: SeriesReference::new(&placement.sheet, category_col, first_row, last_row)?,
            values: SeriesReference::new(&placement.sheet, value_col, first_row, last_row)?,
        })
    }

    fn position(&self, column: &str) -> Result<usize> {
        self.source
            .data
            .column_position(column)
            .ok_or_else(|| Error::UnknownColumn {
                table: self.source.title.clone(),
                column: column.to_string(),
            })
    }
}

/// A chart with concrete references, ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedChart {
    pub kind: ChartKind,
    pub name: String,
    pub anchor: CellAddress,
    pub categories: SeriesReference,
    pub values: SeriesReference,
}
