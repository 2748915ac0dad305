//! Core table reading modules
//!
//! The pipeline runs in one direction:
//!
//! ```text
//! markup -> cells -> dense grid -> simplified rows -> nested map
//! ```

pub mod grid;
pub mod markup;
pub mod structured;
pub mod table;
