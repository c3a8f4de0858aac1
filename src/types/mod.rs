//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `location`: The two inventory locations
//! - `request`: Parsed transfer requests
//! - `error`: Error types for inventory and transfer operations

pub mod error;
pub mod location;
pub mod request;

pub use error::InventoryError;
pub use location::Location;
pub use request::{Quantity, TransferRequest};
