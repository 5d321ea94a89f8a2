//! Utility modules for markdown parsing.

pub mod blocks;
pub mod lookup_tables;

pub use lookup_tables::ValueId;
