//! Courier Inventory Library
//! # Overview
//!
//! This library simulates two inventory locations, a store and a shop, and a
//! courier that moves goods between them on typed requests such as
//! `deliver 3 cookies from store to shop`.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (TransferRequest, Location, errors)
//! - [`cli`] - CLI arguments parsing
//! - [`lexicon`] - Command vocabulary, initial stock and console text per language
//! - [`core`] - Business logic components:
//!   - [`core::stock`] - Capacity and quantity bookkeeping
//!   - [`core::bulk`] / [`core::limited`] - The store and the shop
//!   - [`core::parser`] - Fixed-grammar command parsing
//!   - [`core::coordinator`] - Route resolution and compensated transfers
//! - [`io`] - Console command reading and stock reports
//! - [`console`] - The interactive read-eval-print loop
//!
//! # Locations
//!
//! - **Store**: capacity 100, any number of distinct items
//! - **Shop**: capacity 20, at most 5 distinct items
//!
//! # Transfers
//!
//! Goods are removed from the source first, then added to the destination.
//! If the destination refuses them, they are returned to the source, so a
//! failed transfer never changes how much of an item exists overall.

// Module declarations
pub mod cli;
pub mod console;
pub mod core;
pub mod io;
pub mod lexicon;
pub mod observability;
pub mod types;

pub use console::ConsoleSession;
pub use core::{BulkInventory, CommandParser, Inventory, LimitedInventory, TransferCoordinator};
pub use lexicon::Lexicon;
pub use types::{InventoryError, Location, Quantity, TransferRequest};
