//! # htmltable
//!
//! Span-aware HTML table reader written in Rust.
//!
//! ## Features
//!
//! - **Span Resolution**: `rowspan`/`colspan` cells are copied into every grid
//!   position they cover, producing a dense rectangular grid
//! - **Lenient Markup Reading**: implied end tags, `<th>` cells, character
//!   references and nested tables (flattened into their cell's text)
//! - **Header Folding**: stacked header rows and leading key columns are
//!   joined into single composite headers
//! - **Nested Maps**: tables keyed by row header then column header, or the
//!   other way round
//!
//! ## Usage Examples
//!
//! ### Dense Grid
//!
//! ```rust
//! use htmltable::parse_table;
//!
//! let grid = parse_table(
//!     r#"<table>
//!          <tr><td colspan="2">Header</td></tr>
//!          <tr><td>X</td><td>Y</td></tr>
//!        </table>"#,
//! )
//! .unwrap();
//!
//! assert_eq!(grid[0], ["Header", "Header"].map(String::from));
//! assert_eq!(grid[1], ["X", "Y"].map(String::from));
//! ```
//!
//! ### Nested Map
//!
//! ```rust
//! use htmltable::{table_to_nested_map, Orientation, StructConfig};
//!
//! let map = table_to_nested_map(
//!     "<tr><th></th><th>X</th><th>Y</th></tr><tr><th>R1</th><td>1</td><td>2</td></tr>",
//!     StructConfig::default(),
//!     Orientation::ByRow,
//! )
//! .unwrap();
//!
//! assert_eq!(map["R1"]["X"], "1");
//! ```

/// Core table reading modules
pub mod core;

/// Data layer - character references
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core modules
pub use crate::core::grid;
pub use crate::core::markup;
pub use crate::core::structured;

pub use crate::core::grid::{Cell, Grid, GridResolver};
pub use crate::core::markup::extract_cells;
pub use crate::core::structured::{
    NestedMap, Orientation, StructConfig, StructConfigUpdate, StructuredView,
};
pub use crate::core::table::HtmlTable;

// Re-export utilities
pub use utils::error::{TableError, TableResult};

/// Read table markup into a dense grid
///
/// # Arguments
/// * `html` - Markup containing `<tr>` rows of `<td>`/`<th>` cells
///
/// # Returns
/// The resolved grid, or the first parse or structure error
pub fn parse_table(html: &str) -> TableResult<Grid> {
    HtmlTable::parse(html).map(HtmlTable::into_grid)
}

/// Read table markup straight into a nested map
///
/// # Arguments
/// * `html` - Markup containing `<tr>` rows of `<td>`/`<th>` cells
/// * `config` - Header layout
/// * `orientation` - Which header supplies the outer keys
pub fn table_to_nested_map(
    html: &str,
    config: StructConfig,
    orientation: Orientation,
) -> TableResult<NestedMap> {
    let grid = parse_table(html)?;
    grid.structured(config).to_nested_map(orientation)
}
