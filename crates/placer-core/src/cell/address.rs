//! Cell address and range types

use crate::error::{Error, Result};
use crate::{MAX_COLS, MAX_ROWS};
use std::fmt;
use std::str::FromStr;

/// Column letters addressable by generated references.
const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Map a zero-based column index to its letter.
///
/// Only the first 26 columns (`A`..`Z`) have a name here; anything further
/// is a [`Error::ColumnRange`] rather than a wrap to `AA`.
///
/// ```
/// use placer_core::cell::column_letter;
///
/// assert_eq!(column_letter(0).unwrap(), 'A');
/// assert_eq!(column_letter(25).unwrap(), 'Z');
/// assert!(column_letter(26).is_err());
/// ```
pub fn column_letter(col: u16) -> Result<char> {
    ALPHABET
        .get(col as usize)
        .copied()
        .ok_or(Error::ColumnRange(col as u32))
}

/// Quote a sheet name for use in a formula reference when Excel requires it.
///
/// Names with characters outside `\w` and `.`, names starting with a digit
/// or `.`, and names Excel would read as an A1 or R1C1 reference are quoted.
pub fn quote_sheet_name(name: &str) -> String {
    let plain = !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit() || c == '.')
        && name.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '.')
        && !reads_as_reference(&name.to_uppercase());

    if plain {
        name.to_string()
    } else {
        format!("'{}'", name.replace('\'', "''"))
    }
}

/// Leading run of ASCII digits parsed as a number, 0 when absent or too long
fn leading_number(s: &str) -> u64 {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().unwrap_or(0)
}

fn reads_as_reference(upper: &str) -> bool {
    // whole name is an in-bounds A1 cell such as Q1 or XFD1048576
    let letters = upper.find(|c: char| !c.is_ascii_uppercase()).unwrap_or(upper.len());
    let digits = &upper[letters..];
    if (1..=3).contains(&letters) && !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        let col = upper[..letters]
            .bytes()
            .fold(0u64, |acc, b| acc * 26 + u64::from(b - b'A' + 1));
        let row = leading_number(digits);
        return row > 0 && row <= u64::from(MAX_ROWS) && col <= u64::from(MAX_COLS);
    }

    // R1C1 style prefixes such as R1, R1C1, C5 or RC2
    if let Some(rest) = upper.strip_prefix('R') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            let row = leading_number(rest);
            return row > 0 && row <= u64::from(MAX_ROWS);
        }
    }
    let after_r = upper.strip_prefix('R').unwrap_or(upper);
    if let Some(rest) = after_r.strip_prefix('C') {
        if rest.starts_with(|c: char| c.is_ascii_digit()) {
            let col = leading_number(rest);
            return col > 0 && col <= u64::from(MAX_COLS);
        }
    }

    matches!(upper, "R" | "C" | "RC")
}

/// A cell address (e.g., "A1", "$B$2")
///
/// Rows and columns are 0-based internally and 1-based / lettered in display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellAddress {
    /// Row index (0-based)
    pub row: u32,
    /// Column index (0-based, A=0)
    pub col: u16,
}

impl CellAddress {
    /// Create a new cell address
    pub fn new(row: u32, col: u16) -> Self {
        Self { row, col }
    }

    /// Parse a cell address from A1-style notation; `$` markers are accepted and ignored.
    ///
    /// # Examples
    /// ```
    /// use placer_core::CellAddress;
    ///
    /// let addr = CellAddress::parse("E2").unwrap();
    /// assert_eq!(addr.row, 1);
    /// assert_eq!(addr.col, 4);
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::InvalidAddress("empty address".into()));
        }

        let bytes = s.as_bytes();
        let mut pos = 0;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let col_start = pos;
        while pos < bytes.len() && bytes[pos].is_ascii_alphabetic() {
            pos += 1;
        }

        if pos == col_start {
            return Err(Error::InvalidAddress(format!(
                "no column letters in '{}'",
                s
            )));
        }

        let col = Self::letters_to_column(&s[col_start..pos])
            .ok_or_else(|| Error::InvalidAddress(format!("column out of range in '{}'", s)))?;

        if bytes.get(pos) == Some(&b'$') {
            pos += 1;
        }

        let row_str = &s[pos..];
        if row_str.is_empty() {
            return Err(Error::InvalidAddress(format!("no row number in '{}'", s)));
        }

        let row: u32 = row_str
            .parse()
            .map_err(|_| Error::InvalidAddress(format!("invalid row number in '{}'", s)))?;

        // Excel rows are 1-based
        if row == 0 || row > MAX_ROWS {
            return Err(Error::InvalidAddress(format!(
                "row number out of range in '{}'",
                s
            )));
        }

        Ok(Self { row: row - 1, col })
    }

    /// Convert column letters to index (A = 0, Z = 25, AA = 26, etc.)
    fn letters_to_column(letters: &str) -> Option<u16> {
        let mut col: u32 = 0;
        for c in letters.chars() {
            col = col * 26 + (c.to_ascii_uppercase() as u32 - 'A' as u32 + 1);
            if col > MAX_COLS as u32 {
                return None;
            }
        }
        Some((col - 1) as u16)
    }

    /// Format as A1-style string
    pub fn to_a1_string(&self) -> Result<String> {
        Ok(format!("{}{}", column_letter(self.col)?, self.row + 1))
    }

    /// Format as an absolute `$A$1` reference
    pub fn to_absolute_string(&self) -> Result<String> {
        Ok(format!("${}${}", column_letter(self.col)?, self.row + 1))
    }
}

impl fmt::Display for CellAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_a1_string() {
            Ok(s) => f.write_str(&s),
            Err(_) => write!(f, "R{}C{}", self.row + 1, self.col + 1),
        }
    }
}

impl FromStr for CellAddress {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// A rectangular range of cells, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellRange {
    /// Start address (top-left)
    pub start: CellAddress,
    /// End address (bottom-right)
    pub end: CellAddress,
}

impl CellRange {
    /// Create a new cell range, normalised so `start` is top-left
    pub fn new(start: CellAddress, end: CellAddress) -> Self {
        Self {
            start: CellAddress::new(start.row.min(end.row), start.col.min(end.col)),
            end: CellAddress::new(start.row.max(end.row), start.col.max(end.col)),
        }
    }

    /// Create a range from row/column indices
    pub fn from_indices(start_row: u32, start_col: u16, end_row: u32, end_col: u16) -> Self {
        Self::new(
            CellAddress::new(start_row, start_col),
            CellAddress::new(end_row, end_col),
        )
    }

    /// Check if a cell is within this range
    pub fn contains(&self, addr: &CellAddress) -> bool {
        addr.row >= self.start.row
            && addr.row <= self.end.row
            && addr.col >= self.start.col
            && addr.col <= self.end.col
    }

    /// Get the number of rows in the range
    pub fn row_count(&self) -> u32 {
        self.end.row - self.start.row + 1
    }

    /// Get the number of columns in the range
    pub fn col_count(&self) -> u16 {
        self.end.col - self.start.col + 1
    }

    /// Check if this range overlaps with another
    pub fn overlaps(&self, other: &CellRange) -> bool {
        self.start.row <= other.end.row
            && self.end.row >= other.start.row
            && self.start.col <= other.end.col
            && self.end.col >= other.start.col
    }

    /// Format as A1:B10 string
    pub fn to_a1_string(&self) -> Result<String> {
        Ok(format!(
            "{}:{}",
            self.start.to_a1_string()?,
            self.end.to_a1_string()?
        ))
    }
}
