//! Error handling for table reading
//!
//! This module provides a unified error type and result type for parsing
//! markup, resolving grids and deriving structured views.

use thiserror::Error;

/// Table error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// Parse error - the markup could not be tokenized
    #[error("Parse error at byte {position}: {message}")]
    Parse { message: String, position: u64 },

    /// A coordinate inside the bounding rectangle is covered by no cell
    #[error("Malformed table: no cell covers row {row}, column {col}")]
    MalformedTable { row: usize, col: usize },

    /// Header counts or a requested slice do not fit the grid
    #[error("Invalid struct config: {0}")]
    InvalidStructConfig(String),
}

/// Result type for table operations
pub type TableResult<T> = Result<T, TableError>;

// Convenience constructors for errors
impl TableError {
    pub fn parse_at(message: impl Into<String>, position: u64) -> Self {
        TableError::Parse {
            message: message.into(),
            position,
        }
    }

    pub fn malformed(row: usize, col: usize) -> Self {
        TableError::MalformedTable { row, col }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        TableError::InvalidStructConfig(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let err = TableError::parse_at("unexpected token", 42);
        let msg = err.to_string();
        assert!(msg.contains("Parse error"));
        assert!(msg.contains("byte 42"));
        assert!(msg.contains("unexpected token"));
    }

    #[test]
    fn test_malformed_display() {
        let msg = TableError::malformed(3, 1).to_string();
        assert!(msg.contains("row 3"));
        assert!(msg.contains("column 1"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = TableError::invalid_config("header_rows (4) exceeds grid height (2)");
        assert_eq!(
            err,
            TableError::InvalidStructConfig("header_rows (4) exceeds grid height (2)".into())
        );
        assert!(err.to_string().starts_with("Invalid struct config"));
    }
}
