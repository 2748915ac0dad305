//! Structured Views
//!
//! Reads the leading rows and columns of a resolved [`Grid`] as headers.
//!
//! - Stacked header rows are joined column-wise into one header row
//! - Leading key columns are joined into a single key entry
//! - The result can be keyed into a two-level [`NestedMap`]
//!
//! # Example
//!
//! ```rust
//! use htmltable::grid::Grid;
//! use htmltable::structured::{Orientation, StructuredView};
//!
//! let grid = Grid::from_rows(vec![
//!     vec!["".into(), "X".into(), "Y".into()],
//!     vec!["R1".into(), "1".into(), "2".into()],
//! ])
//! .unwrap();
//!
//! let view = StructuredView::new(&grid);
//! let map = view.to_nested_map(Orientation::ByRow).unwrap();
//! assert_eq!(map["R1"]["Y"], "2");
//! ```
//!
//! [`Grid`]: crate::grid::Grid

mod config;
mod view;


// Re-export public API
pub use config::{Orientation, StructConfig, StructConfigUpdate};
pub use view::{NestedMap, StructuredView};
