//! Inventory doubles shared by unit tests

use crate::core::stock::Stock;
use crate::core::traits::Inventory;
use crate::types::{InventoryError, Quantity};

/// Inventory that hands out goods but refuses to take any in, returned goods included
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct OutboundOnlyInventory {
    stock: Stock,
}

impl OutboundOnlyInventory {
    pub(crate) fn with_items(items: &[(&str, Quantity)]) -> Self {
        let mut stock = Stock::new(100);
        for (item, quantity) in items {
            stock
                .add(item, *quantity)
                .expect("test seed must fit the stock");
        }
        OutboundOnlyInventory { stock }
    }
}

impl Inventory for OutboundOnlyInventory {
    fn add(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        Err(InventoryError::capacity_overflow(item, 0, quantity))
    }

    fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        self.stock.remove(item, quantity)
    }

    fn stock(&self) -> &Stock {
        &self.stock
    }
}
