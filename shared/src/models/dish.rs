//! Dish Model

use crate::money::format_price;
use crate::sequence::DishIdSequence;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// Dish identifier
pub type DishId = i64;

/// Dish entity
///
/// Identity is the id alone: equality, hashing and ordering ignore the
/// name, price and stop-list flag.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dish {
    id: DishId,
    name: String,
    /// Price in currency units (e.g. 2.50)
    price: f64,
    /// true = on the stop list (not available to serve)
    is_stopped: bool,
}

impl Dish {
    /// Create a dish, taking its id from `sequence`
    pub fn new(
        sequence: &DishIdSequence,
        name: impl Into<String>,
        price: f64,
        is_stopped: bool,
    ) -> Self {
        Self::with_id(sequence.next_id(), name, price, is_stopped)
    }

    /// Rebuild a dish with a known id (e.g. loaded from a CSV export)
    pub fn with_id(id: DishId, name: impl Into<String>, price: f64, is_stopped: bool) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            is_stopped,
        }
    }

    pub fn id(&self) -> DishId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn set_price(&mut self, price: f64) {
        self.price = price;
    }

    pub fn is_stopped(&self) -> bool {
        self.is_stopped
    }

    pub fn set_stopped(&mut self, is_stopped: bool) {
        self.is_stopped = is_stopped;
    }

    /// Compare by id: -1 if this dish comes first, 0 if equal, 1 otherwise
    pub fn compare_to(&self, other: &Dish) -> i32 {
        match self.cmp(other) {
            Ordering::Less => -1,
            Ordering::Equal => 0,
            Ordering::Greater => 1,
        }
    }
}

impl fmt::Display for Dish {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ID: {}", self.id)?;
        writeln!(f, "Name of the dish: {}", self.name)?;
        writeln!(f, "Price: {}", format_price(self.price))?;
        write!(
            f,
            "Is it on the stop list: {}",
            if self.is_stopped { "yes" } else { "no" }
        )
    }
}

impl PartialEq for Dish {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Dish {}

impl Hash for Dish {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl PartialOrd for Dish {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Dish {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}
