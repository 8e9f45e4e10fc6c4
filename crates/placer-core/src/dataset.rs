//! Tabular datasets
//!
//! A [`Dataset`] is an ordered list of named, equal-length columns plus an
//! optional row index. It is the unit of data a table descriptor places.

use crate::cell::CellValue;
use crate::error::{Error, Result};

/// A named column of values
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column header
    pub name: String,
    /// Values, one per row
    pub values: Vec<CellValue>,
}

/// Ordered named columns of equal length
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
    index: Option<Vec<CellValue>>,
    index_name: Option<String>,
}

impl Dataset {
    /// Create an empty dataset (no columns, no rows)
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a dataset from `(name, values)` pairs
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<CellValue>)>,
        S: Into<String>,
    {
        let mut dataset = Self::new();
        for (name, values) in columns {
            dataset.push_column(name, values)?;
        }
        Ok(dataset)
    }

    /// Build a dataset from a header and row-major records
    pub fn from_rows<S: Into<String>>(headers: Vec<S>, rows: Vec<Vec<CellValue>>) -> Result<Self> {
        let names: Vec<String> = headers.into_iter().map(Into::into).collect();
        let row_count = rows.len();
        let mut columns: Vec<Vec<CellValue>> = names
            .iter()
            .map(|_| Vec::with_capacity(rows.len()))
            .collect();

        for (row_idx, row) in rows.into_iter().enumerate() {
            if row.len() != names.len() {
                return Err(Error::RaggedColumns {
                    column: format!("row {}", row_idx),
                    expected: names.len(),
                    actual: row.len(),
                });
            }
            for (column, value) in columns.iter_mut().zip(row) {
                column.push(value);
            }
        }

        let mut dataset = Self::from_columns(names.into_iter().zip(columns))?;
        dataset.rows = row_count;
        Ok(dataset)
    }

    /// Append a column; its length must match existing columns
    pub fn push_column<S: Into<String>>(&mut self, name: S, values: Vec<CellValue>) -> Result<()> {
        let name = name.into();
        if self.columns.is_empty() && self.index.is_none() {
            self.rows = values.len();
        } else if values.len() != self.rows {
            return Err(Error::RaggedColumns {
                column: name,
                expected: self.rows,
                actual: values.len(),
            });
        }

        self.columns.push(Column { name, values });
        Ok(())
    }

    /// Attach row index labels; their count must match the row count
    pub fn with_index(mut self, labels: Vec<CellValue>) -> Result<Self> {
        if !self.columns.is_empty() && labels.len() != self.rows {
            return Err(Error::RaggedColumns {
                column: "<index>".to_string(),
                expected: self.rows,
                actual: labels.len(),
            });
        }
        self.rows = labels.len();
        self.index = Some(labels);
        Ok(self)
    }

    /// Name the row index (written above the index column)
    pub fn with_index_name<S: Into<String>>(mut self, name: S) -> Self {
        self.index_name = Some(name.into());
        self
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns (excluding the index)
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// All columns in order
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Column headers in order
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// Zero-based position of the first column with this name
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Value at `(row, column position)`
    pub fn value(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// Label of a row; defaults to the zero-based row number
    pub fn index_label(&self, row: usize) -> CellValue {
        match &self.index {
            Some(labels) => labels.get(row).cloned().unwrap_or_default(),
            None => CellValue::Number(row as f64),
        }
    }

    /// Name of the row index, if any
    pub fn index_name(&self) -> Option<&str> {
        self.index_name.as_deref()
    }

    /// Iterate over rows as vectors of borrowed values
    pub fn rows(&self) -> impl Iterator<Item = Vec<&CellValue>> + '_ {
        (0..self.rows).map(move |row| self.columns.iter().map(|c| &c.values[row]).collect())
    }
}
