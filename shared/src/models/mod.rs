//! Data models
//!
//! All IDs are `i64`, issued by [`crate::sequence::DishIdSequence`].

pub mod dish;

// Re-exports
pub use dish::*;
