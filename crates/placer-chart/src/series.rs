//! Data series references

use std::fmt;

use placer_core::{column_letter, quote_sheet_name, Result};

/// Where a series takes its categories from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategorySource {
    /// The table's row-index column
    Index,
    /// A named dataset column
    Column(String),
}

impl From<&str> for CategorySource {
    /// `"index"` selects the row index; anything else is a column name.
    fn from(name: &str) -> Self {
        if name == "index" {
            CategorySource::Index
        } else {
            CategorySource::Column(name.to_string())
        }
    }
}

impl From<String> for CategorySource {
    fn from(name: String) -> Self {
        CategorySource::from(name.as_str())
    }
}

/// An absolute single-column reference, e.g. `=Data!$B$4:$B$7`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesReference {
    /// Sheet name (unquoted)
    pub sheet: String,
    /// Column letter
    pub letter: char,
    /// First row (1-based)
    pub first_row: u32,
    /// Last row (1-based)
    pub last_row: u32,
}

impl SeriesReference {
    /// Reference `col` over the 1-based rows `first_row..=last_row`
    pub fn new<S: Into<String>>(sheet: S, col: u16, first_row: u32, last_row: u32) -> Result<Self> {
        Ok(Self {
            sheet: sheet.into(),
            letter: column_letter(col)?,
            first_row,
            last_row,
        })
    }

    /// The range without the leading `=`
    pub fn range(&self) -> String {
        format!(
            "{}!${l}${}:${l}${}",
            quote_sheet_name(&self.sheet),
            self.first_row,
            self.last_row,
            l = self.letter
        )
    }
}

impl fmt::Display for SeriesReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "={}", self.range())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placer_core::Error;

    #[test]
    fn test_category_source_from_str() {
        assert_eq!(CategorySource::from("index"), CategorySource::Index);
        assert_eq!(
            CategorySource::from("Month"),
            CategorySource::Column("Month".to_string())
        );
        assert_eq!(
            CategorySource::from("Index"),
            CategorySource::Column("Index".to_string())
        );
    }

    #[test]
    fn test_reference_syntax() {
        let r = SeriesReference::new("Data", 1, 4, 7).unwrap();
        assert_eq!(r.to_string(), "=Data!$B$4:$B$7");
        assert_eq!(r.range(), "Data!$B$4:$B$7");

        let r = SeriesReference::new("Q1 Sales", 0, 2, 3).unwrap();
        assert_eq!(r.to_string(), "='Q1 Sales'!$A$2:$A$3");
    }

    #[test]
    fn test_reference_beyond_z() {
        assert!(matches!(
            SeriesReference::new("Data", 26, 1, 2),
            Err(Error::ColumnRange(26))
        ));
    }
}
