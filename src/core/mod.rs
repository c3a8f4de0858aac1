//! Core business logic module
//!
//! This module contains the inventory model and transfer processing:
//! - `traits` - The `Inventory` abstraction shared by both locations
//! - `stock` - Capacity and quantity bookkeeping used by every inventory
//! - `bulk` - The store: large capacity, no variety limit
//! - `limited` - The shop: small capacity, at most five distinct items
//! - `parser` - Fixed-grammar command parsing
//! - `coordinator` - Route resolution and compensated transfers

pub mod bulk;
pub mod coordinator;
pub mod limited;
pub mod parser;
pub mod stock;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use bulk::{BulkInventory, STORE_CAPACITY};
pub use coordinator::TransferCoordinator;
pub use limited::{LimitedInventory, SHOP_CAPACITY, SHOP_VARIETY_LIMIT};
pub use parser::CommandParser;
pub use stock::Stock;
pub use traits::Inventory;
