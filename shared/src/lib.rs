//! Shared types for the restaurant menu
//!
//! Domain types used by the store and any other consumer: the dish model,
//! the id sequence that numbers dishes, money helpers and the error type.

pub mod error;
pub mod models;
pub mod money;
pub mod sequence;

// Re-exports
pub use error::{MenuError, MenuResult};
pub use models::{Dish, DishId};
pub use sequence::DishIdSequence;
pub use serde::{Deserialize, Serialize};
