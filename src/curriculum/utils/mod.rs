//! Utility modules for curriculum generation.

pub mod lookup_tables;

pub use lookup_tables::*;
