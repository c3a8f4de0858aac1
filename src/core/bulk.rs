//! Bulk inventory ("store")
//!
//! Large capacity and no limit on the number of distinct items. `add` and
//! `remove` apply the shared stock rules with no extra policy.

use crate::core::stock::{seed_with, Stock};
use crate::core::traits::Inventory;
use crate::types::{InventoryError, Quantity};

/// Default capacity of the store
pub const STORE_CAPACITY: Quantity = 100;

/// Large-capacity inventory with no variety limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkInventory {
    stock: Stock,
}

impl BulkInventory {
    /// Create an empty store with the default capacity
    pub fn new() -> Self {
        Self::with_capacity(STORE_CAPACITY)
    }

    pub fn with_capacity(capacity: Quantity) -> Self {
        BulkInventory {
            stock: Stock::new(capacity),
        }
    }

    /// Create a store with the default capacity holding a copy of `items`
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if an entry has a zero quantity or the entries
    /// together exceed the capacity.
    pub fn with_items<I, S>(items: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = (S, Quantity)>,
        S: AsRef<str>,
    {
        Self::with_items_and_capacity(items, STORE_CAPACITY)
    }

    pub fn with_items_and_capacity<I, S>(
        items: I,
        capacity: Quantity,
    ) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = (S, Quantity)>,
        S: AsRef<str>,
    {
        let mut inventory = Self::with_capacity(capacity);
        seed_with(items, |item, quantity| inventory.add(item, quantity))?;
        Ok(inventory)
    }
}

impl Default for BulkInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory for BulkInventory {
    fn add(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        self.stock.add(item, quantity)
    }

    fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        self.stock.remove(item, quantity)
    }

    fn stock(&self) -> &Stock {
        &self.stock
    }
}
