//! Span Resolution
//!
//! Turns sparse cell declarations into a dense, rectangular grid.
//!
//! Each declared cell carries the row it was authored in, its position among
//! its sibling cells, and its row/column spans. Cells from earlier rows whose
//! `rowspan` reaches into a later row have already claimed columns there, so a
//! cell's declared position is only where the search for a free column
//! starts:
//!
//! ```text
//! declared cells -> occupancy map (row -> col -> owner) -> dense rows
//! ```
//!
//! # Example
//!
//! ```rust
//! use htmltable::grid::{Cell, Grid};
//!
//! let cells = vec![
//!     Cell::with_span(0, 0, 2, 1, "Side"),
//!     Cell::new(0, 1, "A"),
//!     Cell::new(1, 0, "B"),
//! ];
//! let grid = Grid::resolve(&cells).unwrap();
//! assert_eq!(grid.row(1), Some(&["Side".to_string(), "B".to_string()][..]));
//! ```

mod cell;
mod resolver;

#[cfg(test)]
mod tests;

// Re-export public API
pub use cell::{parse_span, Cell, MAX_CELL_AREA, MAX_COL_SPAN, MAX_ROW_SPAN};
pub use resolver::{Grid, GridResolver};

pub(crate) use resolver::transpose_rows;
