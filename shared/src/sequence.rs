//! Dish id generation
//!
//! Ids are issued by an explicit sequence owned by the store instead of a
//! process-wide counter. Numbering starts at 1 and never goes backwards.

use crate::models::DishId;
use std::sync::atomic::{AtomicI64, Ordering};

/// Monotonic id sequence for dishes
#[derive(Debug, Default)]
pub struct DishIdSequence {
    last: AtomicI64,
}

impl DishIdSequence {
    /// Create a sequence whose first id is 1
    pub fn new() -> Self {
        Self::starting_after(0)
    }

    /// Create a sequence that continues after `last`
    ///
    /// Used when dishes with existing ids are loaded, so that new dishes
    /// never collide with them.
    pub fn starting_after(last: DishId) -> Self {
        Self {
            last: AtomicI64::new(last),
        }
    }

    /// Issue the next id
    pub fn next_id(&self) -> DishId {
        self.last.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Most recently issued id (0 if none)
    pub fn last_id(&self) -> DishId {
        self.last.load(Ordering::Relaxed)
    }

    /// Move the sequence forward so the next id is greater than `id`
    pub fn advance_past(&self, id: DishId) {
        self.last.fetch_max(id, Ordering::Relaxed);
    }
}
