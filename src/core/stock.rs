//! Shared stock bookkeeping
//!
//! `Stock` carries the capacity and quantity arithmetic common to every
//! inventory. It enforces two invariants:
//! - the sum of all quantities never exceeds the capacity
//! - no item is stored with a zero quantity
//!
//! Items keep the order in which they were first stocked. An item that runs
//! out and is stocked again moves to the end.

use crate::types::{InventoryError, Quantity};
use indexmap::IndexMap;

/// Item quantities bounded by a fixed capacity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stock {
    /// Map of item names to held quantities (all > 0)
    items: IndexMap<String, Quantity>,

    /// Maximum total quantity, fixed at construction
    capacity: Quantity,
}

impl Stock {
    /// Create an empty stock with the given capacity
    pub fn new(capacity: Quantity) -> Self {
        Stock {
            items: IndexMap::new(),
            capacity,
        }
    }

    pub fn items(&self) -> &IndexMap<String, Quantity> {
        &self.items
    }

    pub fn capacity(&self) -> Quantity {
        self.capacity
    }

    /// Sum of all held quantities
    pub fn total_quantity(&self) -> Quantity {
        // Bounded by capacity, so the sum cannot overflow
        self.items.values().sum()
    }

    pub fn free_space(&self) -> Quantity {
        self.capacity - self.total_quantity()
    }

    pub fn unique_item_count(&self) -> usize {
        self.items.len()
    }

    pub fn contains(&self, item: &str) -> bool {
        self.items.contains_key(item)
    }

    pub fn quantity_of(&self, item: &str) -> Quantity {
        self.items.get(item).copied().unwrap_or(0)
    }

    /// Add `quantity` of `item`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quantity` is zero
    /// - `quantity` exceeds the current free space
    ///
    /// The stock is unchanged on error.
    pub fn add(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::invalid_quantity("0"));
        }

        let free = self.free_space();
        if quantity > free {
            return Err(InventoryError::capacity_overflow(item, free, quantity));
        }

        *self.items.entry(item.to_string()).or_insert(0) += quantity;

        Ok(())
    }

    /// Remove `quantity` of `item`, dropping the entry when it reaches zero
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `quantity` is zero
    /// - `item` is absent or held in a smaller quantity
    ///
    /// The stock is unchanged on error.
    pub fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        if quantity == 0 {
            return Err(InventoryError::invalid_quantity("0"));
        }

        let available = self.quantity_of(item);
        if available < quantity {
            return Err(InventoryError::insufficient_stock(item, available, quantity));
        }

        if available == quantity {
            self.items.shift_remove(item);
        } else if let Some(held) = self.items.get_mut(item) {
            *held -= quantity;
        }

        Ok(())
    }
}

/// Build an inventory from owned seed contents by replaying them through `add`
///
/// Any rejected entry turns into an `InvalidSeed` error, so a seed can never
/// produce an inventory that breaks its invariants.
pub(crate) fn seed_with<I, S, F>(items: I, mut add: F) -> Result<(), InventoryError>
where
    I: IntoIterator<Item = (S, Quantity)>,
    S: AsRef<str>,
    F: FnMut(&str, Quantity) -> Result<(), InventoryError>,
{
    for (item, quantity) in items {
        let item = item.as_ref();
        add(item, quantity)
            .map_err(|e| InventoryError::invalid_seed(format!("'{}': {}", item, e)))?;
    }
    Ok(())
}
