//! Error types for the menu store

use crate::models::DishId;
use thiserror::Error;

/// Menu error types
#[derive(Debug, Error)]
pub enum MenuError {
    /// No dish is stored under the requested id
    #[error("Dish not found: {0}")]
    DishNotFound(DishId),

    /// Two dishes share the same id
    #[error("Duplicate dish id: {0}")]
    DuplicateDish(DishId),

    /// IO error while reading or writing a menu file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed line in a CSV menu file
    #[error("Invalid CSV at line {line}: {reason}")]
    Csv { line: usize, reason: String },
}

impl MenuError {
    /// Create a Csv error
    pub fn csv(line: usize, reason: impl Into<String>) -> Self {
        Self::Csv {
            line,
            reason: reason.into(),
        }
    }
}

/// Result type for menu operations
pub type MenuResult<T> = Result<T, MenuError>;
