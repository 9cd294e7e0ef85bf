//! Column-driven row sorting
//!
//! A [`SortStrategy`] describes one sort pass over a sheet's rows: which
//! column drives the order, how its raw text is interpreted, the direction,
//! and whether the first row is a header. The strategy supplies the
//! row-comparison oracle used by [`Worksheet::sort_by_column`] and the
//! range/flag strings an auto-filter sort-condition writer consumes.
//!
//! [`Worksheet::sort_by_column`]: crate::worksheet::Worksheet::sort_by_column

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::address::CellAddress;
use crate::error::{Error, Result};
use crate::row::Row;

/// Sort order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SortDirection {
    /// Smallest value first
    Ascending,
    /// Largest value first
    Descending,
}

impl SortDirection {
    /// Get the persisted token for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "ascending",
            SortDirection::Descending => "descending",
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ascending" => Ok(SortDirection::Ascending),
            "descending" => Ok(SortDirection::Descending),
            _ => Err(Error::UnknownDirection(s.into())),
        }
    }
}

/// How raw cell text is interpreted when comparing two rows
///
/// The `all-*` tokens used by [`FromStr`] and the optional serde impls match
/// the configuration strings of earlier releases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellValueType {
    /// Case-insensitive lexicographic comparison
    #[cfg_attr(feature = "serde", serde(rename = "all-strings"))]
    Text,
    /// Case-sensitive lexicographic comparison
    #[cfg_attr(feature = "serde", serde(rename = "all-strings-case-sensitive"))]
    TextCaseSensitive,
    /// Numeric comparison after stripping one `$`
    #[cfg_attr(feature = "serde", serde(rename = "all-dollars"))]
    Currency,
    /// Numeric comparison after stripping one `%`
    #[cfg_attr(feature = "serde", serde(rename = "all-percentages"))]
    Percentage,
    /// Plain numeric comparison
    #[cfg_attr(feature = "serde", serde(rename = "all-floats"))]
    Float,
}

impl CellValueType {
    /// Get the persisted token for this value type
    pub fn as_str(&self) -> &'static str {
        match self {
            CellValueType::Text => "all-strings",
            CellValueType::TextCaseSensitive => "all-strings-case-sensitive",
            CellValueType::Currency => "all-dollars",
            CellValueType::Percentage => "all-percentages",
            CellValueType::Float => "all-floats",
        }
    }
}

impl fmt::Display for CellValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CellValueType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "all-strings" => Ok(CellValueType::Text),
            "all-strings-case-sensitive" => Ok(CellValueType::TextCaseSensitive),
            "all-dollars" => Ok(CellValueType::Currency),
            "all-percentages" => Ok(CellValueType::Percentage),
            "all-floats" => Ok(CellValueType::Float),
            _ => Err(Error::UnknownValueType(s.into())),
        }
    }
}

/// Configuration for one sort pass over a sheet's rows
///
/// The strategy is borrowed, never mutated, by the sort and by the range
/// builders. `column_index` must be a valid cell index for every data row;
/// rectangularity is the caller's contract and a short row fails in the cell
/// accessor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortStrategy {
    /// Explicit column letters; overrides the computed letters when set
    #[cfg_attr(feature = "serde", serde(default))]
    pub column: Option<String>,
    /// 0-based index of the column that drives the order
    pub column_index: u16,
    /// How cell text is parsed and compared
    pub values_type: CellValueType,
    /// Sort order
    pub direction: SortDirection,
    /// First row is a header and is excluded from sorting
    #[cfg_attr(feature = "serde", serde(default))]
    pub has_header: bool,
}

impl SortStrategy {
    /// Create a strategy sorting on `column_index`, without a header row
    pub fn new(column_index: u16, values_type: CellValueType, direction: SortDirection) -> Self {
        Self {
            column: None,
            column_index,
            values_type,
            direction,
            has_header: false,
        }
    }

    /// Set whether the first row is a header
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set explicit column letters, overriding the computed ones
    pub fn with_column<S: Into<String>>(mut self, column: S) -> Self {
        self.column = Some(column.into());
        self
    }

    /// Column letters used in address construction
    ///
    /// Returns the explicit override verbatim when set, otherwise the
    /// letters computed from `column_index`.
    pub fn column_letters(&self) -> String {
        match &self.column {
            Some(column) if !column.is_empty() => column.clone(),
            _ => CellAddress::column_to_letters(self.column_index),
        }
    }

    /// The direction flag a sort-condition consumer expects: "1" for
    /// descending, "0" for ascending
    pub fn descending_as_string(&self) -> &'static str {
        match self.direction {
            SortDirection::Descending => "1",
            SortDirection::Ascending => "0",
        }
    }

    /// Range of the rows subject to sorting, e.g. "B2:B20"
    ///
    /// The top-left row number becomes 2 when the sheet has a header row,
    /// 1 otherwise; the top-right corner is kept.
    pub fn state_range(&self, top_left: &str, top_right: &str) -> Result<String> {
        let top_left = CellAddress::parse(top_left)?;
        let top_right = CellAddress::parse(top_right)?;
        let start = CellAddress::new(u32::from(self.has_header), top_left.col);
        Ok(format!("{}:{}", start, top_right))
    }

    /// Single-column range whose values drive the sort, e.g. "N1:N20"
    ///
    /// Both corners move to the resolved sort column; their row numbers are
    /// preserved.
    pub fn condition_range(&self, top_left: &str, top_right: &str) -> Result<String> {
        let top_left = CellAddress::parse(top_left)?;
        let top_right = CellAddress::parse(top_right)?;
        let column = self.column_letters();
        Ok(format!(
            "{}{}:{}{}",
            column,
            top_left.row + 1,
            column,
            top_right.row + 1
        ))
    }

    /// Compare two rows by the configured column, value type and direction
    ///
    /// Equal keys are `Equal` regardless of direction; relative order of
    /// equal-valued rows is left to the sort algorithm.
    pub fn compare_rows(&self, row_a: &Row, row_b: &Row) -> Ordering {
        let a = self.cell_text(row_a);
        let b = self.cell_text(row_b);

        let ordering = match self.values_type {
            CellValueType::Text => a.to_lowercase().cmp(&b.to_lowercase()),
            CellValueType::TextCaseSensitive => a.cmp(b),
            CellValueType::Currency => {
                numeric_value(a, Some('$')).total_cmp(&numeric_value(b, Some('$')))
            }
            CellValueType::Percentage => {
                numeric_value(a, Some('%')).total_cmp(&numeric_value(b, Some('%')))
            }
            CellValueType::Float => numeric_value(a, None).total_cmp(&numeric_value(b, None)),
        };

        match self.direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    /// Comparison oracle for an external swap-based sort: true exactly when
    /// `row_a` must appear after `row_b` under the configured order
    pub fn should_swap_rows(&self, row_a: &Row, row_b: &Row) -> bool {
        self.compare_rows(row_a, row_b) == Ordering::Greater
    }

    fn cell_text<'a>(&self, row: &'a Row) -> &'a str {
        row.cells()[usize::from(self.column_index)].value()
    }
}

/// Parse cell text as a float, stripping at most one occurrence of `cut`
/// and surrounding whitespace. Unparsable text sorts as zero.
fn numeric_value(text: &str, cut: Option<char>) -> f64 {
    let stripped = match cut {
        Some(symbol) => text.replacen(symbol, "", 1),
        None => text.to_string(),
    };

    match stripped.trim().parse::<f64>() {
        Ok(value) => value,
        Err(_) => {
            if !stripped.trim().is_empty() {
                log::trace!("cell text '{}' is not numeric, sorting as 0", text);
            }
            0.0
        }
    }
}
