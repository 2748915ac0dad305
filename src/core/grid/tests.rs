//! Regression tests for span resolution

use super::*;
use crate::utils::error::TableError;
use pretty_assertions::assert_eq;

fn rows(grid: &Grid) -> Vec<Vec<&str>> {
    grid.iter()
        .map(|row| row.iter().map(String::as_str).collect())
        .collect()
}

#[test]
fn test_no_spans() {
    let cells = vec![
        Cell::new(0, 0, "A"),
        Cell::new(0, 1, "B"),
        Cell::new(1, 0, "C"),
        Cell::new(1, 1, "D"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(rows(&grid), vec![vec!["A", "B"], vec!["C", "D"]]);
    assert_eq!(grid.len(), 2);
    assert_eq!(grid.width(), 2);
}

#[test]
fn test_colspan_header() {
    let cells = vec![
        Cell::with_span(0, 0, 1, 2, "Header"),
        Cell::new(1, 0, "X"),
        Cell::new(1, 1, "Y"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(rows(&grid), vec![vec!["Header", "Header"], vec!["X", "Y"]]);
}

#[test]
fn test_rowspan_side() {
    let cells = vec![
        Cell::with_span(0, 0, 2, 1, "Side"),
        Cell::new(0, 1, "A"),
        Cell::new(1, 0, "B"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(rows(&grid), vec![vec!["Side", "A"], vec!["Side", "B"]]);
}

#[test]
fn test_stale_declared_columns_skip_claimed() {
    // Row 1 declares C and D at positions 0 and 1, but column 0 belongs to A
    let cells = vec![
        Cell::with_span(0, 0, 2, 1, "A"),
        Cell::with_span(0, 1, 1, 2, "B"),
        Cell::new(1, 0, "C"),
        Cell::new(1, 1, "D"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(rows(&grid), vec![vec!["A", "B", "B"], vec!["A", "C", "D"]]);
}

#[test]
fn test_rowspan_in_middle_column() {
    let cells = vec![
        Cell::new(0, 0, "a"),
        Cell::with_span(0, 1, 3, 1, "tall"),
        Cell::new(0, 2, "b"),
        Cell::new(1, 0, "c"),
        Cell::new(1, 1, "d"),
        Cell::new(2, 0, "e"),
        Cell::new(2, 1, "f"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(
        rows(&grid),
        vec![
            vec!["a", "tall", "b"],
            vec!["c", "tall", "d"],
            vec!["e", "tall", "f"],
        ]
    );
}

#[test]
fn test_block_span() {
    let cells = vec![
        Cell::with_span(0, 0, 2, 2, "block"),
        Cell::new(0, 1, "r0"),
        Cell::new(1, 0, "r1"),
        Cell::new(2, 0, "x"),
        Cell::new(2, 1, "y"),
        Cell::new(2, 2, "z"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(
        rows(&grid),
        vec![
            vec!["block", "block", "r0"],
            vec!["block", "block", "r1"],
            vec!["x", "y", "z"],
        ]
    );
}

#[test]
fn test_empty_input() {
    let grid = Grid::resolve(&[]).unwrap();
    assert!(grid.is_empty());
    assert_eq!(grid.width(), 0);
}

#[test]
fn test_short_row_is_malformed() {
    let cells = vec![
        Cell::new(0, 0, "A"),
        Cell::new(0, 1, "B"),
        Cell::new(1, 0, "C"),
    ];
    let err = Grid::resolve(&cells).unwrap_err();
    assert_eq!(err, TableError::MalformedTable { row: 1, col: 1 });
}

#[test]
fn test_empty_row_is_malformed() {
    let cells = vec![Cell::new(0, 0, "A"), Cell::new(2, 0, "C")];
    let err = Grid::resolve(&cells).unwrap_err();
    assert_eq!(err, TableError::MalformedTable { row: 1, col: 0 });
}

#[test]
fn test_overflowing_rowspan_is_malformed() {
    // The span reaches a row nobody else fills
    let cells = vec![Cell::with_span(0, 0, 2, 1, "A"), Cell::new(0, 1, "B")];
    let err = Grid::resolve(&cells).unwrap_err();
    assert_eq!(err, TableError::MalformedTable { row: 1, col: 1 });
}

#[test]
fn test_overlap_later_cell_wins() {
    // C's colspan runs into the column B already claimed in row 1
    let cells = vec![
        Cell::new(0, 0, "A"),
        Cell::with_span(0, 1, 2, 1, "B"),
        Cell::with_span(1, 0, 1, 2, "C"),
    ];
    let grid = Grid::resolve(&cells).unwrap();

    assert_eq!(rows(&grid), vec![vec!["A", "B"], vec!["C", "C"]]);
}

#[test]
fn test_resolver_incremental() {
    let cells = vec![Cell::new(0, 0, "x"), Cell::new(0, 0, "y")];
    let mut resolver = GridResolver::new();
    resolver.place(0, &cells[0]);
    resolver.place(1, &cells[1]);
    let grid = resolver.finish(&cells).unwrap();

    // Same declared position: the second cell is pushed right
    assert_eq!(rows(&grid), vec![vec!["x", "y"]]);
}

#[test]
fn test_accessors() {
    let grid = Grid::from_rows(vec![
        vec!["a".into(), "b".into()],
        vec!["c".into(), "d".into()],
    ])
    .unwrap();

    assert_eq!(grid.get(1, 0), Some("c"));
    assert_eq!(grid.get(2, 0), None);
    assert_eq!(grid.get(0, 2), None);
    assert_eq!(&grid[0], &["a".to_string(), "b".to_string()][..]);
    assert!(grid.row(5).is_none());
    assert_eq!((&grid).into_iter().count(), 2);
}

#[test]
fn test_from_rows_ragged() {
    let err = Grid::from_rows(vec![vec!["a".into(), "b".into()], vec!["c".into()]]).unwrap_err();
    assert_eq!(err, TableError::MalformedTable { row: 1, col: 1 });
}

#[test]
fn test_transpose() {
    let grid = Grid::from_rows(vec![
        vec!["a".into(), "b".into(), "c".into()],
        vec!["d".into(), "e".into(), "f".into()],
    ])
    .unwrap();
    let t = grid.transpose();

    assert_eq!(t.len(), 3);
    assert_eq!(t.width(), 2);
    assert_eq!(rows(&t), vec![vec!["a", "d"], vec!["b", "e"], vec!["c", "f"]]);
    assert_eq!(t.transpose(), grid);
}
