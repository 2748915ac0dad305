//! Data layer - character reference lookup

pub mod entities;

pub use entities::decode_reference;
