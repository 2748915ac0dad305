//! Markup reader
//!
//! Streams table markup through `quick-xml` in a lenient, HTML-tolerant
//! configuration and collects one [`Cell`] per `<td>`/`<th>` element.
//!
//! Rows are `<tr>` elements in document order and a cell's declared position
//! is its index among the cells of its row. Text of every descendant is
//! concatenated and trimmed, so tables nested inside a cell only contribute
//! their text. Implied end tags are honoured: `<td>` or `<th>` closes an open
//! cell, `<tr>` closes an open row.
//!
//! Before tokenizing, a `<` that cannot start markup is escaped so it stays
//! text, and `<script>`/`<style>` bodies are escaped as raw text. Their
//! contents never reach a cell.

use std::borrow::Cow;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use tracing::{debug, warn};

use crate::core::grid::{parse_span, Cell};
use crate::data::entities::decode_reference;
use crate::utils::error::{TableError, TableResult};

/// Element kinds the reader cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TableTag {
    Table,
    Row,
    Cell,
    /// `<script>` or `<style>`
    RawText,
    Other,
}

impl TableTag {
    fn from_name(name: &[u8]) -> Self {
        if name.eq_ignore_ascii_case(b"table") {
            TableTag::Table
        } else if name.eq_ignore_ascii_case(b"tr") {
            TableTag::Row
        } else if name.eq_ignore_ascii_case(b"td") || name.eq_ignore_ascii_case(b"th") {
            TableTag::Cell
        } else if raw_text_close(name).is_some() {
            TableTag::RawText
        } else {
            TableTag::Other
        }
    }
}

/// A row whose cells are still being read
#[derive(Debug)]
struct OpenRow {
    index: usize,
    next_col: usize,
}

/// A cell whose text is still being read
#[derive(Debug)]
struct OpenCell {
    row_index: usize,
    col_index: usize,
    row_span: usize,
    col_span: usize,
    text: String,
}

/// State machine fed by markup events
#[derive(Debug, Default)]
struct CellCollector {
    cells: Vec<Cell>,
    rows_seen: usize,
    row: Option<OpenRow>,
    cell: Option<OpenCell>,
    /// Depth of `<table>` elements opened inside the current cell
    nested_tables: usize,
    in_raw_text: bool,
}

impl CellCollector {
    fn open(&mut self, tag: TableTag, element: &BytesStart<'_>) {
        if tag == TableTag::RawText {
            self.in_raw_text = true;
            return;
        }
        if self.cell.is_some() {
            match tag {
                TableTag::Table => {
                    self.nested_tables += 1;
                    return;
                }
                TableTag::RawText | TableTag::Other => return,
                _ if self.nested_tables > 0 => return,
                // Implied end of the open cell
                TableTag::Row | TableTag::Cell => {}
            }
        }

        match tag {
            TableTag::Row => {
                self.close_row();
                self.row = Some(OpenRow {
                    index: self.rows_seen,
                    next_col: 0,
                });
                self.rows_seen += 1;
            }
            TableTag::Cell => {
                self.close_cell();
                let Some(row) = self.row.as_mut() else {
                    warn!("ignoring cell outside of a table row");
                    return;
                };
                let (row_span, col_span) = read_spans(element);
                self.cell = Some(OpenCell {
                    row_index: row.index,
                    col_index: row.next_col,
                    row_span,
                    col_span,
                    text: String::new(),
                });
                row.next_col += 1;
            }
            TableTag::Table | TableTag::RawText | TableTag::Other => {}
        }
    }

    fn close(&mut self, tag: TableTag) {
        if tag == TableTag::RawText {
            self.in_raw_text = false;
            return;
        }
        if self.cell.is_some() && self.nested_tables > 0 {
            if tag == TableTag::Table {
                self.nested_tables -= 1;
            }
            return;
        }

        match tag {
            TableTag::Cell => self.close_cell(),
            TableTag::Row | TableTag::Table => self.close_row(),
            TableTag::RawText | TableTag::Other => {}
        }
    }

    fn text(&mut self, text: &str) {
        if self.in_raw_text {
            return;
        }
        if let Some(cell) = self.cell.as_mut() {
            cell.text.push_str(text);
        }
    }

    fn close_cell(&mut self) {
        self.nested_tables = 0;
        if let Some(open) = self.cell.take() {
            self.cells.push(Cell::with_span(
                open.row_index,
                open.col_index,
                open.row_span,
                open.col_span,
                open.text.trim(),
            ));
        }
    }

    fn close_row(&mut self) {
        self.close_cell();
        self.row = None;
    }

    fn finish(mut self) -> Vec<Cell> {
        self.close_row();
        debug!(
            rows = self.rows_seen,
            cells = self.cells.len(),
            "collected table cells"
        );
        self.cells
    }
}

/// Read `rowspan` and `colspan` with HTML attribute rules
fn read_spans(element: &BytesStart<'_>) -> (usize, usize) {
    let mut row_span = 1;
    let mut col_span = 1;
    for attr in element.html_attributes().flatten() {
        let key = attr.key.local_name();
        let value = String::from_utf8_lossy(&attr.value);
        if key.as_ref().eq_ignore_ascii_case(b"rowspan") {
            row_span = parse_span(Some(&*value));
        } else if key.as_ref().eq_ignore_ascii_case(b"colspan") {
            col_span = parse_span(Some(&*value));
        }
    }
    (row_span, col_span)
}

/// Closing tag prefix of an element whose body is raw text
fn raw_text_close(name: &[u8]) -> Option<&'static str> {
    if name.eq_ignore_ascii_case(b"script") {
        Some("</script")
    } else if name.eq_ignore_ascii_case(b"style") {
        Some("</style")
    } else {
        None
    }
}

/// Escape `<` that HTML reads as text, and the bodies of raw text elements
///
/// A `<` starts markup only when followed by a letter, `/`, `!` or `?`.
fn escape_stray_markup(html: &str) -> Cow<'_, str> {
    let bytes = html.as_bytes();
    let mut out = String::new();
    let mut copied = 0;
    let mut pos = 0;

    while let Some(found) = html[pos..].find('<') {
        let start = pos + found;
        pos = start + 1;
        match bytes.get(pos) {
            Some(b) if b.is_ascii_alphabetic() => {
                let name_len = bytes[pos..]
                    .iter()
                    .take_while(|b| b.is_ascii_alphanumeric())
                    .count();
                let Some(close) = raw_text_close(&bytes[pos..pos + name_len]) else {
                    continue;
                };
                let Some(gt) = html[pos..].find('>') else {
                    break;
                };
                let body_start = pos + gt + 1;
                if bytes[body_start - 2] == b'/' {
                    pos = body_start;
                    continue;
                }
                let body_end = bytes[body_start..]
                    .windows(close.len())
                    .position(|w| w.eq_ignore_ascii_case(close.as_bytes()))
                    .map_or(html.len(), |i| body_start + i);
                let body = &html[body_start..body_end];
                if body.contains(['<', '&']) {
                    out.push_str(&html[copied..body_start]);
                    out.push_str(&body.replace('&', "&amp;").replace('<', "&lt;"));
                    copied = body_end;
                }
                pos = body_end;
            }
            Some(b'/' | b'!' | b'?') => {}
            _ => {
                out.push_str(&html[copied..start]);
                out.push_str("&lt;");
                copied = pos;
            }
        }
    }

    if copied == 0 {
        return Cow::Borrowed(html);
    }
    out.push_str(&html[copied..]);
    Cow::Owned(out)
}

/// Extract every cell declaration from table markup, in source order
///
/// Error positions are byte offsets into the markup after stray `<`
/// characters and raw text bodies have been escaped.
pub fn extract_cells(html: &str) -> TableResult<Vec<Cell>> {
    let markup = escape_stray_markup(html);
    let mut reader = Reader::from_str(&markup);
    let config = reader.config_mut();
    config.check_end_names = false;
    config.allow_unmatched_ends = true;
    config.allow_dangling_amp = true;

    let mut collector = CellCollector::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(ref e)) => {
                collector.open(TableTag::from_name(e.local_name().as_ref()), e);
            }
            Ok(Event::Empty(ref e)) => {
                let tag = TableTag::from_name(e.local_name().as_ref());
                collector.open(tag, e);
                collector.close(tag);
            }
            Ok(Event::End(ref e)) => {
                collector.close(TableTag::from_name(e.local_name().as_ref()));
            }
            Ok(Event::Text(ref t)) => collector.text(&String::from_utf8_lossy(t)),
            Ok(Event::CData(ref t)) => collector.text(&String::from_utf8_lossy(t)),
            Ok(Event::GeneralRef(ref r)) => {
                let name = String::from_utf8_lossy(r);
                match decode_reference(&name) {
                    Some(decoded) => collector.text(&decoded),
                    None => collector.text(&format!("&{};", name)),
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(TableError::parse_at(e.to_string(), reader.error_position())),
            _ => {}
        }
    }

    Ok(collector.finish())
}
