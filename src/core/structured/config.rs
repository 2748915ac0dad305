//! Header layout options for structured views

use crate::core::grid::Grid;
use crate::utils::error::{TableError, TableResult};

/// How the leading rows and columns of a grid are read as headers
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StructConfig {
    /// Number of leading rows folded into the header row
    pub header_rows: usize,
    /// Number of leading columns folded into the row key
    pub header_cols: usize,
    /// Separator between values of stacked header rows
    pub row_joiner: String,
    /// Separator between values of adjacent header columns
    pub col_joiner: String,
}

impl Default for StructConfig {
    fn default() -> Self {
        Self {
            header_rows: 1,
            header_cols: 1,
            row_joiner: " ".to_string(),
            col_joiner: " ".to_string(),
        }
    }
}

impl StructConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Treat every row and column as data
    pub fn no_headers() -> Self {
        Self::with_headers(0, 0)
    }

    pub fn with_headers(header_rows: usize, header_cols: usize) -> Self {
        Self {
            header_rows,
            header_cols,
            ..Default::default()
        }
    }

    /// Overwrite the fields set in `update`, leaving the others untouched
    pub fn merge(&mut self, update: StructConfigUpdate) {
        if let Some(n) = update.header_rows {
            self.header_rows = n;
        }
        if let Some(n) = update.header_cols {
            self.header_cols = n;
        }
        if let Some(s) = update.row_joiner {
            self.row_joiner = s;
        }
        if let Some(s) = update.col_joiner {
            self.col_joiner = s;
        }
    }

    /// Check that the header region fits inside `grid`
    pub fn validate(&self, grid: &Grid) -> TableResult<()> {
        if self.header_rows > grid.len() {
            return Err(TableError::invalid_config(format!(
                "header_rows ({}) exceeds grid height ({})",
                self.header_rows,
                grid.len()
            )));
        }
        if self.header_cols > grid.width() {
            return Err(TableError::invalid_config(format!(
                "header_cols ({}) exceeds grid width ({})",
                self.header_cols,
                grid.width()
            )));
        }
        Ok(())
    }
}

/// Partial update for [`StructConfig`]; unset fields keep their value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructConfigUpdate {
    pub header_rows: Option<usize>,
    pub header_cols: Option<usize>,
    pub row_joiner: Option<String>,
    pub col_joiner: Option<String>,
}

impl StructConfigUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header_rows(mut self, n: usize) -> Self {
        self.header_rows = Some(n);
        self
    }

    pub fn header_cols(mut self, n: usize) -> Self {
        self.header_cols = Some(n);
        self
    }

    pub fn row_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.row_joiner = Some(joiner.into());
        self
    }

    pub fn col_joiner(mut self, joiner: impl Into<String>) -> Self {
        self.col_joiner = Some(joiner.into());
        self
    }
}

/// Axis whose header provides the outer keys of a nested map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Outer keys come from the leading key column
    #[default]
    ByRow,
    /// Outer keys come from the header row (the simplified table is transposed)
    ByColumn,
}
