//! Worksheet type

use crate::row::Row;
use crate::sort::SortStrategy;

/// A worksheet (single sheet in a workbook)
///
/// Rows are stored in document order; sorting reorders them in place.
#[derive(Debug)]
pub struct Worksheet {
    /// Sheet name
    name: String,
    /// Rows in document order
    rows: Vec<Row>,
}

impl Worksheet {
    /// Create a new worksheet with the given name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            rows: Vec::new(),
        }
    }

    /// Get the sheet name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name<S: Into<String>>(&mut self, name: S) {
        self.name = name.into();
    }

    /// Append an empty row and return a mutable reference to it
    pub fn add_row(&mut self) -> &mut Row {
        self.rows.push(Row::new());
        self.rows.last_mut().unwrap()
    }

    /// Get a row by index
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Get a mutable row by index
    pub fn row_mut(&mut self, index: usize) -> Option<&mut Row> {
        self.rows.get_mut(index)
    }

    /// All rows in document order
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Check if the sheet has any rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort rows in place by the strategy's column and value type
    ///
    /// When the strategy has a header row, the first row stays in place and
    /// only the rows below it are reordered. The sort is stable, so rows
    /// with equal keys keep their relative order.
    pub fn sort_by_column(&mut self, strategy: &SortStrategy) {
        let data_start = usize::from(strategy.has_header);
        if self.rows.len() <= data_start {
            return;
        }

        log::debug!(
            "sorting sheet '{}' by column {} over {} rows",
            self.name,
            strategy.column_letters(),
            self.rows.len() - data_start
        );

        self.rows[data_start..].sort_by(|a, b| strategy.compare_rows(a, b));
    }
}
