//! Header folding and nested-map extraction

use indexmap::IndexMap;
use tracing::debug;

use super::config::{Orientation, StructConfig, StructConfigUpdate};
use crate::core::grid::{transpose_rows, Grid};
use crate::utils::error::TableResult;

/// Two-level map: row key -> (column key -> value), in first-seen key order
pub type NestedMap = IndexMap<String, IndexMap<String, String>>;

/// Read-only projection of a [`Grid`] through a [`StructConfig`]
///
/// The view borrows the grid. Derived tables are recomputed from the current
/// config on every call.
#[derive(Debug, Clone)]
pub struct StructuredView<'a> {
    grid: &'a Grid,
    config: StructConfig,
}

impl<'a> StructuredView<'a> {
    /// View `grid` with the default config (one header row, one key column)
    pub fn new(grid: &'a Grid) -> Self {
        Self::with_config(grid, StructConfig::default())
    }

    pub fn with_config(grid: &'a Grid, config: StructConfig) -> Self {
        StructuredView { grid, config }
    }

    pub fn grid(&self) -> &'a Grid {
        self.grid
    }

    pub fn config(&self) -> &StructConfig {
        &self.config
    }

    /// Merge `update` into the current config
    pub fn update_config(&mut self, update: StructConfigUpdate) -> &mut Self {
        self.config.merge(update);
        self
    }

    /// Rows read as headers
    pub fn header_rows(&self) -> TableResult<&'a [Vec<String>]> {
        self.config.validate(self.grid)?;
        Ok(&self.grid.rows()[..self.config.header_rows])
    }

    /// Rows after the header rows
    pub fn data_rows(&self) -> TableResult<&'a [Vec<String>]> {
        self.config.validate(self.grid)?;
        Ok(&self.grid.rows()[self.config.header_rows..])
    }

    /// The folded header row followed by every folded data row
    ///
    /// With `header_rows == 0` no header row is emitted, and with
    /// `header_cols == 0` rows keep their full width without a key column.
    pub fn simplified(&self) -> TableResult<Vec<Vec<String>>> {
        let headers = self.header_rows()?;
        let data = self.data_rows()?;

        let mut table = Vec::with_capacity(data.len() + 1);
        if !headers.is_empty() {
            let header = self.fold_header_rows(headers);
            table.push(self.fold_key_columns(&header));
        }
        table.extend(data.iter().map(|row| self.fold_key_columns(row)));
        Ok(table)
    }

    /// Nested map keyed by the leading column, then by the header row
    ///
    /// Keys need not be unique: a repeated row key replaces the earlier inner
    /// map and a repeated column key replaces the earlier value.
    pub fn to_nested_map(&self, orientation: Orientation) -> TableResult<NestedMap> {
        let simplified = self.simplified()?;
        let table = match orientation {
            Orientation::ByRow => simplified,
            Orientation::ByColumn => {
                let width = simplified.first().map_or(0, Vec::len);
                transpose_rows(&simplified, width)
            }
        };

        let map = nest_by_leading_keys(&table);
        debug!(?orientation, outer_keys = map.len(), "extracted nested map");
        Ok(map)
    }

    fn fold_header_rows(&self, headers: &[Vec<String>]) -> Vec<String> {
        (0..self.grid.width())
            .map(|col| {
                headers
                    .iter()
                    .map(|row| row[col].as_str())
                    .collect::<Vec<_>>()
                    .join(self.config.row_joiner.as_str())
            })
            .collect()
    }

    fn fold_key_columns(&self, row: &[String]) -> Vec<String> {
        let key_cols = self.config.header_cols;
        if key_cols == 0 {
            return row.to_vec();
        }

        let mut folded = Vec::with_capacity(1 + row.len() - key_cols);
        folded.push(row[..key_cols].join(self.config.col_joiner.as_str()));
        folded.extend_from_slice(&row[key_cols..]);
        folded
    }
}

/// Key each row after the first by its leading entry, and each of its values
/// by the first row's entry in the same column
fn nest_by_leading_keys(table: &[Vec<String>]) -> NestedMap {
    let mut map = NestedMap::new();
    let Some((header, body)) = table.split_first() else {
        return map;
    };
    let col_keys = header.get(1..).unwrap_or_default();

    for row in body {
        let Some((row_key, values)) = row.split_first() else {
            continue;
        };
        let inner = col_keys
            .iter()
            .zip(values)
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        map.insert(row_key.clone(), inner);
    }
    map
}

impl Grid {
    /// Structured view of this grid with the given config
    pub fn structured(&self, config: StructConfig) -> StructuredView<'_> {
        StructuredView::with_config(self, config)
    }
}

