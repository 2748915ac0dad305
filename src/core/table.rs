//! Parsed HTML tables
//!
//! [`HtmlTable`] ties the pipeline together: it keeps the source markup, the
//! declared cells read from it and the dense grid resolved from those cells.
//! Rows are exposed read-only, like a sequence of rows.

use std::ops::Index;

use tracing::debug;

use super::grid::{Cell, Grid};
use super::markup::extract_cells;
use super::structured::{StructConfig, StructuredView};
use crate::utils::error::TableResult;

/// A table read from markup, resolved into a dense grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlTable {
    html: String,
    cells: Vec<Cell>,
    grid: Grid,
}

impl HtmlTable {
    /// Read every `<tr>` of `html` as a table row and resolve spans
    ///
    /// Fails if the markup cannot be tokenized or if the resolved grid has a
    /// position no cell covers.
    pub fn parse(html: impl Into<String>) -> TableResult<Self> {
        let html = html.into();
        let cells = extract_cells(&html)?;
        let grid = Grid::resolve(&cells)?;
        debug!(
            rows = grid.len(),
            width = grid.width(),
            cells = cells.len(),
            "parsed html table"
        );
        Ok(HtmlTable { html, cells, grid })
    }

    /// The markup this table was read from
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Declared cells in source order, before span resolution
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn len(&self) -> usize {
        self.grid.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grid.is_empty()
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.grid.row(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.grid.iter()
    }

    /// Structured view over this table's grid
    pub fn structured(&self, config: StructConfig) -> StructuredView<'_> {
        StructuredView::with_config(&self.grid, config)
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }
}

impl Index<usize> for HtmlTable {
    type Output = [String];

    fn index(&self, index: usize) -> &Self::Output {
        &self.grid[index]
    }
}

impl<'a> IntoIterator for &'a HtmlTable {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.grid.iter()
    }
}

impl std::str::FromStr for HtmlTable {
    type Err = crate::utils::error::TableError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HtmlTable::parse(s)
    }
}
