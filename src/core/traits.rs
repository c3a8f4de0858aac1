//! Core trait for inventory locations
//!
//! This module defines the `Inventory` abstraction shared by the store and the
//! shop. Both keep their contents in a [`Stock`] and add their own policy on top.

use crate::core::stock::Stock;
use crate::types::{InventoryError, Quantity};
use indexmap::IndexMap;

/// Trait for an inventory location
///
/// `add` and `remove` either apply completely or leave the inventory untouched.
/// Failures are returned as [`InventoryError`] values; no operation panics on
/// an absent item or a shortfall.
pub trait Inventory {
    /// Add `quantity` of `item`, if the inventory's policy and free space allow it
    fn add(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError>;

    /// Remove `quantity` of `item`, if that much is held
    fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError>;

    /// Read-only view of the underlying stock
    fn stock(&self) -> &Stock;

    /// Current contents as item → quantity
    fn items(&self) -> &IndexMap<String, Quantity> {
        self.stock().items()
    }

    fn capacity(&self) -> Quantity {
        self.stock().capacity()
    }

    /// Capacity minus the sum of all held quantities
    fn free_space(&self) -> Quantity {
        self.stock().free_space()
    }

    fn unique_item_count(&self) -> usize {
        self.stock().unique_item_count()
    }

    /// Quantity held of `item`, 0 when absent
    fn quantity_of(&self, item: &str) -> Quantity {
        self.stock().quantity_of(item)
    }
}
