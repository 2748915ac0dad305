//! Utility modules
//!
//! Error types and result types shared by every stage of the pipeline.

pub mod error;

pub use error::{TableError, TableResult};
