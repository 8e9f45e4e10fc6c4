//! Conditional formatting
//!
//! A [`ConditionalFormatRule`] pairs a cell-value test with the [`CellStyle`]
//! applied to cells that pass it. Tests are either single-value comparisons
//! or range (between) checks; the two shapes are distinct variants of
//! [`CfTest`], so a rule always carries exactly the operands its operator
//! needs.
//!
//! ## Example
//!
//! ```rust
//! use placer_core::conditional_format::{cell_shading, cell_shading_range};
//! use placer_core::{CfTest, Color};
//!
//! // Red fill for scores of 90 and above
//! let high = cell_shading(Color::RED, Color::WHITE, ">=", 90).unwrap();
//! assert!(matches!(high.test, CfTest::Value { .. }));
//!
//! // Amber fill for scores in the middle band
//! let mid = cell_shading_range(Color::rgb(255, 235, 156), Color::BLACK, "between", 50, 89).unwrap();
//! assert!(matches!(mid.test, CfTest::Range { .. }));
//! ```

use crate::cell::CellValue;
use crate::error::{Error, Result};
use crate::style::{CellStyle, Color};
use std::fmt;
use std::str::FromStr;

/// A conditional formatting rule attached to one table column
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionalFormatRule {
    /// Style applied to matching cells
    pub style: CellStyle,
    /// The cell-value test
    pub test: CfTest,
}

impl ConditionalFormatRule {
    /// Create a rule from a test with an empty style
    pub fn new(test: CfTest) -> Self {
        Self {
            style: CellStyle::default(),
            test,
        }
    }

    /// Highlight cells comparing against a single value
    pub fn cell_is(operator: ValueOperator, value: impl Into<CellValue>) -> Self {
        Self::new(CfTest::Value {
            operator,
            value: value.into(),
        })
    }

    /// Highlight cells between two values (inclusive)
    pub fn cell_is_between(minimum: impl Into<CellValue>, maximum: impl Into<CellValue>) -> Self {
        Self::new(CfTest::Range {
            operator: RangeOperator::Between,
            minimum: minimum.into(),
            maximum: maximum.into(),
        })
    }

    /// Highlight cells outside two values
    pub fn cell_is_not_between(
        minimum: impl Into<CellValue>,
        maximum: impl Into<CellValue>,
    ) -> Self {
        Self::new(CfTest::Range {
            operator: RangeOperator::NotBetween,
            minimum: minimum.into(),
            maximum: maximum.into(),
        })
    }

    /// Set the style to apply when the rule matches
    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }
}

/// The test a conditional format applies to each cell value
#[derive(Debug, Clone, PartialEq)]
pub enum CfTest {
    /// Compare against one value
    Value {
        operator: ValueOperator,
        value: CellValue,
    },
    /// Check against an inclusive `[minimum, maximum]` range
    Range {
        operator: RangeOperator,
        minimum: CellValue,
        maximum: CellValue,
    },
}

impl CfTest {
    /// Build a single-value test from a criteria string such as `">="`
    pub fn value(criteria: &str, value: impl Into<CellValue>) -> Result<Self> {
        match criteria.parse::<Criteria>()? {
            Criteria::Value(operator) => Ok(CfTest::Value {
                operator,
                value: value.into(),
            }),
            Criteria::Range(op) => Err(Error::InvalidCriteria(format!(
                "'{}' needs a minimum and maximum",
                op
            ))),
        }
    }

    /// Build a range test from a criteria string such as `"between"`
    pub fn range(
        criteria: &str,
        minimum: impl Into<CellValue>,
        maximum: impl Into<CellValue>,
    ) -> Result<Self> {
        match criteria.parse::<Criteria>()? {
            Criteria::Range(operator) => Ok(CfTest::Range {
                operator,
                minimum: minimum.into(),
                maximum: maximum.into(),
            }),
            Criteria::Value(op) => Err(Error::InvalidCriteria(format!(
                "'{}' compares against a single value",
                op
            ))),
        }
    }
}

/// Single-value comparison operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueOperator {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterThanOrEqual,
    LessThan,
    LessThanOrEqual,
}

impl ValueOperator {
    /// Symbolic form (e.g. `>=`)
    pub fn symbol(&self) -> &'static str {
        match self {
            ValueOperator::Equal => "==",
            ValueOperator::NotEqual => "!=",
            ValueOperator::GreaterThan => ">",
            ValueOperator::GreaterThanOrEqual => ">=",
            ValueOperator::LessThan => "<",
            ValueOperator::LessThanOrEqual => "<=",
        }
    }
}

impl fmt::Display for ValueOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Range operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeOperator {
    Between,
    NotBetween,
}

impl fmt::Display for RangeOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeOperator::Between => f.write_str("between"),
            RangeOperator::NotBetween => f.write_str("not between"),
        }
    }
}

/// A parsed criteria string: either a value comparison or a range check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criteria {
    Value(ValueOperator),
    Range(RangeOperator),
}

impl FromStr for Criteria {
    type Err = Error;

    /// Accepts symbols (`>=`, `<>`) and words (`greater than or equal to`), any case.
    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();

        let criteria = match normalized.as_str() {
            "==" | "=" | "equal to" | "equal" => Criteria::Value(ValueOperator::Equal),
            "!=" | "<>" | "not equal to" | "not equal" => {
                Criteria::Value(ValueOperator::NotEqual)
            }
            ">" | "greater than" => Criteria::Value(ValueOperator::GreaterThan),
            ">=" | "greater than or equal to" => {
                Criteria::Value(ValueOperator::GreaterThanOrEqual)
            }
            "<" | "less than" => Criteria::Value(ValueOperator::LessThan),
            "<=" | "less than or equal to" => Criteria::Value(ValueOperator::LessThanOrEqual),
            "between" => Criteria::Range(RangeOperator::Between),
            "not between" => Criteria::Range(RangeOperator::NotBetween),
            _ => return Err(Error::InvalidCriteria(s.to_string())),
        };
        Ok(criteria)
    }
}

/// Shade cells passing a single-value test with a background and font colour.
pub fn cell_shading(
    background: Color,
    font_color: Color,
    criteria: &str,
    value: impl Into<CellValue>,
) -> Result<ConditionalFormatRule> {
    Ok(ConditionalFormatRule::new(CfTest::value(criteria, value)?)
        .with_style(CellStyle::new().background(background).font_color(font_color)))
}

/// Shade cells passing a range test with a background and font colour.
pub fn cell_shading_range(
    background: Color,
    font_color: Color,
    criteria: &str,
    minimum: impl Into<CellValue>,
    maximum: impl Into<CellValue>,
) -> Result<ConditionalFormatRule> {
    Ok(
        ConditionalFormatRule::new(CfTest::range(criteria, minimum, maximum)?)
            .with_style(CellStyle::new().background(background).font_color(font_color)),
    )
}
