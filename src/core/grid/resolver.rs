//! Occupancy-aware grid resolver

use std::ops::Index;

use fxhash::FxHashMap;
use tracing::{debug, trace, warn};

use super::cell::Cell;
use crate::utils::error::{TableError, TableResult};

/// Dense, rectangular row-major grid of cell text
///
/// Every row has exactly `width()` entries. A grid is built once and never
/// mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Vec<String>>", into = "Vec<Vec<String>>")
)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    width: usize,
}

impl Grid {
    /// Resolve declared cells (in source order) into a dense grid
    pub fn resolve(cells: &[Cell]) -> TableResult<Self> {
        let mut resolver = GridResolver::new();
        for (idx, cell) in cells.iter().enumerate() {
            resolver.place(idx, cell);
        }
        resolver.finish(cells)
    }

    /// Build a grid from rows that are already dense
    ///
    /// Fails with [`TableError::MalformedTable`] at the first missing position
    /// if the rows are ragged.
    pub fn from_rows(rows: Vec<Vec<String>>) -> TableResult<Self> {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, r)| r.len() < width) {
            return Err(TableError::malformed(row, cells.len()));
        }
        Ok(Grid { rows, width })
    }

    /// Number of rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of columns (identical for every row)
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row(&self, index: usize) -> Option<&[String]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        self.rows.get(row)?.get(col).map(String::as_str)
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vec<String>> {
        self.rows.iter()
    }

    /// Column-major copy of this grid
    pub fn transpose(&self) -> Grid {
        let rows = transpose_rows(&self.rows, self.width);
        let width = if rows.is_empty() { 0 } else { self.rows.len() };
        Grid { rows, width }
    }

    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

impl Index<usize> for Grid {
    type Output = [String];

    fn index(&self, index: usize) -> &Self::Output {
        &self.rows[index]
    }
}

impl TryFrom<Vec<Vec<String>>> for Grid {
    type Error = TableError;

    fn try_from(rows: Vec<Vec<String>>) -> Result<Self, Self::Error> {
        Grid::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<String>> {
    fn from(grid: Grid) -> Self {
        grid.rows
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a Vec<String>;
    type IntoIter = std::slice::Iter<'a, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

/// Swap rows and columns of a rectangular table
pub(crate) fn transpose_rows(rows: &[Vec<String>], width: usize) -> Vec<Vec<String>> {
    (0..width)
        .map(|col| rows.iter().map(|row| row[col].clone()).collect())
        .collect()
}

/// Span resolver
///
/// Keeps an explicit occupancy map (row -> column -> owning cell) so that a
/// column is claimed at most once per row by the scan in [`place`].
///
/// [`place`]: GridResolver::place
#[derive(Debug, Default)]
pub struct GridResolver {
    /// Claimed positions: row -> (column -> index of the owning cell)
    occupancy: FxHashMap<usize, FxHashMap<usize, usize>>,
    /// Largest row and column written so far
    max_row: Option<usize>,
    max_col: Option<usize>,
}

impl GridResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Place one declared cell; `idx` identifies it in the slice later given to
    /// [`finish`](GridResolver::finish)
    ///
    /// Cells must arrive in source order. The start column is the first column
    /// at or after the declared one that is still free in the cell's own row.
    /// Rows below are not rescanned; a collision there is overwritten by this
    /// cell.
    pub fn place(&mut self, idx: usize, cell: &Cell) {
        let first_row = cell.row_index();
        let start_col = self.first_free_column(first_row, cell.col_index());

        trace!(
            row = first_row,
            declared_col = cell.col_index(),
            start_col,
            row_span = cell.row_span(),
            col_span = cell.col_span(),
            "placing cell"
        );

        let last_row = first_row + cell.row_span().saturating_sub(1);
        let last_col = start_col + cell.col_span().saturating_sub(1);

        for row in first_row..=last_row {
            let claimed = self.occupancy.entry(row).or_default();
            for col in start_col..=last_col {
                if let Some(previous) = claimed.insert(col, idx) {
                    warn!(row, col, previous, current = idx, "overlapping spans, later cell wins");
                }
            }
        }

        self.max_row = self.max_row.max(Some(last_row));
        self.max_col = self.max_col.max(Some(last_col));
    }

    fn first_free_column(&self, row: usize, declared: usize) -> usize {
        let mut col = declared;
        if let Some(claimed) = self.occupancy.get(&row) {
            while claimed.contains_key(&col) {
                col += 1;
            }
        }
        col
    }

    /// Materialize the dense grid
    ///
    /// `cells` must be the slice whose indices were passed to
    /// [`place`](GridResolver::place). Fails on the first unclaimed position
    /// inside the bounding rectangle, in row-major order.
    pub fn finish(self, cells: &[Cell]) -> TableResult<Grid> {
        let (Some(max_row), Some(max_col)) = (self.max_row, self.max_col) else {
            return Ok(Grid::default());
        };

        let width = max_col + 1;
        let mut rows = Vec::with_capacity(max_row + 1);

        for row in 0..=max_row {
            let claimed = self
                .occupancy
                .get(&row)
                .ok_or(TableError::malformed(row, 0))?;

            let mut values = Vec::with_capacity(width);
            for col in 0..width {
                let owner = claimed
                    .get(&col)
                    .and_then(|&idx| cells.get(idx))
                    .ok_or(TableError::malformed(row, col))?;
                values.push(owner.text().to_string());
            }
            rows.push(values);
        }

        debug!(rows = rows.len(), width, cells = cells.len(), "resolved grid");
        Ok(Grid { rows, width })
    }
}

