//! Restaurant menu store
//!
//! Dishes are kept in a `BTreeMap` keyed by id, so every view of the menu
//! (full map, filtered maps, exports) comes out in ascending id order.
//! Invariant: every key equals the id of the dish stored under it.

use crate::export::read_csv_file;
use shared::money::sum_prices;
use shared::{Dish, DishId, DishIdSequence, MenuError, MenuResult};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::Path;
use tracing::{debug, info, warn};

/// Ordered id → dish mapping
pub type DishMap = BTreeMap<DishId, Dish>;

/// Example menu used by [`Restaurant::populate`]: (name, price, is_stopped)
const EXAMPLE_DISHES: [(&str, f64, bool); 3] = [
    ("tomato soup", 2.50, false),
    ("pasta bolognese", 4.00, false),
    ("greek salad", 1.25, true),
];

/// The restaurant's menu
#[derive(Debug, Default)]
pub struct Restaurant {
    dishes: DishMap,
    sequence: DishIdSequence,
}

impl Restaurant {
    /// Create a restaurant with an empty menu
    pub fn new() -> Self {
        Self::with_sequence(DishIdSequence::new())
    }

    /// Create a restaurant that numbers its dishes from `sequence`
    pub fn with_sequence(sequence: DishIdSequence) -> Self {
        Self {
            dishes: DishMap::new(),
            sequence,
        }
    }

    pub fn dishes(&self) -> &DishMap {
        &self.dishes
    }

    pub fn len(&self) -> usize {
        self.dishes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dishes.is_empty()
    }

    /// Look up a dish by id
    pub fn dish(&self, id: DishId) -> MenuResult<&Dish> {
        self.dishes.get(&id).ok_or(MenuError::DishNotFound(id))
    }

    /// Look up a dish by id for modification
    pub fn dish_mut(&mut self, id: DishId) -> MenuResult<&mut Dish> {
        self.dishes.get_mut(&id).ok_or(MenuError::DishNotFound(id))
    }

    /// Create a dish and add it to the menu
    ///
    /// Returns `false` if a dish was already stored under the new id. Ids come
    /// from this store's own sequence, so that branch is not reached in
    /// normal use.
    pub fn add_dish(&mut self, name: impl Into<String>, price: f64, is_stopped: bool) -> bool {
        let dish = Dish::new(&self.sequence, name, price, is_stopped);
        match self.dishes.entry(dish.id()) {
            Entry::Vacant(slot) => {
                debug!(id = dish.id(), name = dish.name(), "Dish added");
                slot.insert(dish);
                true
            }
            Entry::Occupied(_) => {
                warn!(id = dish.id(), "Dish id already in use, not added");
                false
            }
        }
    }

    /// Remove every dish (the id sequence keeps counting)
    pub fn clear(&mut self) {
        self.dishes.clear();
    }

    /// Replace the menu with the example dishes
    pub fn populate(&mut self) {
        self.clear();
        for (name, price, is_stopped) in EXAMPLE_DISHES {
            self.add_dish(name, price, is_stopped);
        }
        info!(count = self.dishes.len(), "Menu populated with example dishes");
    }

    /// Remove a dish; `false` if no dish has this id
    pub fn delete_dish(&mut self, id: DishId) -> bool {
        let removed = self.dishes.remove(&id).is_some();
        debug!(id, removed, "Delete dish");
        removed
    }

    /// Put a dish on or take it off the stop list
    ///
    /// Returns `Ok(false)` when the dish already has the requested status.
    pub fn update_stoplist(&mut self, id: DishId, is_stopped: bool) -> MenuResult<bool> {
        let dish = self.dish_mut(id).inspect_err(|_| {
            warn!(id, "Stop list update for unknown dish");
        })?;

        if dish.is_stopped() == is_stopped {
            return Ok(false);
        }

        dish.set_stopped(is_stopped);
        debug!(id, is_stopped, "Stop list updated");
        Ok(true)
    }

    /// Change the price of a dish
    pub fn update_price(&mut self, id: DishId, price: f64) -> MenuResult<()> {
        let dish = self.dish_mut(id)?;
        dish.set_price(price);
        debug!(id, price, "Price updated");
        Ok(())
    }

    /// Dishes on the stop list (`true`) or available to serve (`false`)
    pub fn available_or_stoplist(&self, is_stopped: bool) -> DishMap {
        self.dishes
            .iter()
            .filter(|(_, dish)| dish.is_stopped() == is_stopped)
            .map(|(id, dish)| (*id, dish.clone()))
            .collect()
    }

    /// Sum of the prices of all dishes (0 for an empty menu)
    pub fn total_price(&self) -> f64 {
        sum_prices(self.dishes.values().map(Dish::price))
    }

    /// Replace the menu with the dishes in a CSV export
    ///
    /// Ids from the file are kept; the sequence moves past the largest one so
    /// dishes added afterwards get fresh ids. Returns the number of dishes
    /// loaded. A repeated id is rejected with `DuplicateDish`. On error the
    /// current menu is left untouched.
    pub fn load_csv_file(&mut self, path: impl AsRef<Path>) -> MenuResult<usize> {
        let path = path.as_ref();
        let records = read_csv_file(path)?;

        let mut loaded = DishMap::new();
        for record in records {
            match loaded.entry(record.id) {
                Entry::Vacant(slot) => {
                    slot.insert(record.into_dish());
                }
                Entry::Occupied(_) => {
                    warn!(path = %path.display(), id = record.id, "Duplicate dish id in CSV");
                    return Err(MenuError::DuplicateDish(record.id));
                }
            }
        }

        if let Some(&last) = loaded.keys().next_back() {
            self.sequence.advance_past(last);
        }
        self.dishes = loaded;

        info!(path = %path.display(), count = self.dishes.len(), "Menu loaded from CSV");
        Ok(self.dishes.len())
    }
}
