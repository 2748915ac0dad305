//! Cell declarations as authored in the markup

/// Largest `colspan` honoured; larger values are clamped
pub const MAX_COL_SPAN: usize = 1000;

/// Largest `rowspan` honoured; larger values are clamped
pub const MAX_ROW_SPAN: usize = 65534;

/// Largest number of grid positions a single cell may cover
///
/// Applied after the per-axis limits by shortening `rowspan`, so one cell
/// never claims more than this many positions during resolution.
pub const MAX_CELL_AREA: usize = 1 << 20;

/// A single declared cell, before span resolution
///
/// `row_index` is the position of the cell's row among sibling rows and
/// `col_index` the position of the cell among its siblings, not the logical
/// column it ends up in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "CellFields"))]
pub struct Cell {
    row_index: usize,
    col_index: usize,
    row_span: usize,
    col_span: usize,
    text: String,
}

impl Cell {
    /// Create a cell spanning a single row and column
    pub fn new(row_index: usize, col_index: usize, text: impl Into<String>) -> Self {
        Self::with_span(row_index, col_index, 1, 1, text)
    }

    /// Create a cell with explicit spans
    ///
    /// Spans of zero are raised to one and oversized spans are clamped to
    /// [`MAX_ROW_SPAN`] and [`MAX_COL_SPAN`], then `rowspan` is shortened until
    /// the cell covers at most [`MAX_CELL_AREA`] positions.
    pub fn with_span(
        row_index: usize,
        col_index: usize,
        row_span: usize,
        col_span: usize,
        text: impl Into<String>,
    ) -> Self {
        let col_span = col_span.clamp(1, MAX_COL_SPAN);
        let row_span = row_span.clamp(1, MAX_ROW_SPAN).min(MAX_CELL_AREA / col_span);
        Cell {
            row_index,
            col_index,
            row_span,
            col_span,
            text: text.into(),
        }
    }

    pub fn row_index(&self) -> usize {
        self.row_index
    }

    pub fn col_index(&self) -> usize {
        self.col_index
    }

    pub fn row_span(&self) -> usize {
        self.row_span
    }

    pub fn col_span(&self) -> usize {
        self.col_span
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether this cell covers more than one grid position
    pub fn is_spanning(&self) -> bool {
        self.row_span > 1 || self.col_span > 1
    }
}

/// Wire form of [`Cell`]; deserialized cells are normalized like constructed ones
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CellFields {
    row_index: usize,
    col_index: usize,
    #[serde(default)]
    row_span: usize,
    #[serde(default)]
    col_span: usize,
    #[serde(default)]
    text: String,
}

#[cfg(feature = "serde")]
impl From<CellFields> for Cell {
    fn from(fields: CellFields) -> Self {
        Cell::with_span(
            fields.row_index,
            fields.col_index,
            fields.row_span,
            fields.col_span,
            fields.text,
        )
    }
}

/// Parse a `rowspan`/`colspan` attribute value
///
/// Missing, non-numeric and zero values all degrade to a span of 1.
pub fn parse_span(value: Option<&str>) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .filter(|&n| n > 0)
        .unwrap_or(1)
}
