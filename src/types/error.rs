//! Error types for the courier inventory
//!
//! This module defines all error types that can occur while parsing commands,
//! changing inventory contents and running transfers. Errors are designed to be
//! descriptive for log output; the console shows its own localized messages.
//!
//! # Error Categories
//!
//! - **Command Errors**: Unrecognized command line, unusable quantity
//! - **Routing Errors**: Source/destination pair is not a permitted route
//! - **Stock Errors**: Insufficient stock, capacity overflow, variety limit
//! - **I/O Errors**: Console read/write failures, report serialization

use crate::types::Quantity;
use thiserror::Error;

/// Main error type for inventory operations
///
/// Every variant except `IoError` and `ReportError` is recoverable: the
/// console reports it and prompts for the next command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InventoryError {
    /// Command line does not match the fixed grammar
    #[error("Unrecognized command '{input}'")]
    ParseError {
        /// The offending line, after normalization
        input: String,
    },

    /// Quantity is zero or too large to represent
    #[error("Invalid quantity '{value}'")]
    InvalidQuantity {
        /// The quantity as typed
        value: String,
    },

    /// Source/destination pair is not one of the two permitted directions
    #[error("No route from '{origin}' to '{destination}'")]
    InvalidRoute {
        /// Source location name
        origin: String,
        /// Destination location name
        destination: String,
    },

    /// Item is absent or held in a smaller quantity than requested
    ///
    /// No mutation happens before this error is raised.
    #[error("Insufficient stock of '{item}': available {available}, requested {requested}")]
    InsufficientStock {
        /// Item name
        item: String,
        /// Quantity currently held (0 when absent)
        available: Quantity,
        /// Requested quantity
        requested: Quantity,
    },

    /// Item does not fit into the remaining free space
    #[error("Not enough space for {requested} of '{item}': free space {free}")]
    CapacityOverflow {
        /// Item name
        item: String,
        /// Free space at the time of the request
        free: Quantity,
        /// Requested quantity
        requested: Quantity,
    },

    /// Inventory already holds the maximum number of distinct items
    #[error("Cannot stock new item '{item}': limit of {limit} distinct items reached")]
    VarietyLimitExceeded {
        /// Item name
        item: String,
        /// Maximum number of distinct items
        limit: usize,
    },

    /// Goods removed from the source could not be put back after a failed delivery
    #[error("Failed to return {quantity} of '{item}' to {location}")]
    CompensationFailed {
        /// Item name
        item: String,
        /// Quantity that could not be returned
        quantity: Quantity,
        /// Name of the source location
        location: String,
    },

    /// Initial contents violate an inventory invariant
    #[error("Invalid initial stock: {reason}")]
    InvalidSeed {
        /// Which invariant was violated
        reason: String,
    },

    /// Console I/O failure
    ///
    /// This is a fatal error that ends the session.
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// Stock report could not be serialized
    #[error("Report error: {message}")]
    ReportError {
        /// Description of the serialization error
        message: String,
    },
}

impl From<std::io::Error> for InventoryError {
    fn from(error: std::io::Error) -> Self {
        InventoryError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for InventoryError {
    fn from(error: csv::Error) -> Self {
        InventoryError::ReportError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl InventoryError {
    /// Create a ParseError
    pub fn parse_error(input: &str) -> Self {
        InventoryError::ParseError {
            input: input.to_string(),
        }
    }

    /// Create an InvalidQuantity error
    pub fn invalid_quantity(value: &str) -> Self {
        InventoryError::InvalidQuantity {
            value: value.to_string(),
        }
    }

    /// Create an InvalidRoute error
    pub fn invalid_route(source: &str, destination: &str) -> Self {
        InventoryError::InvalidRoute {
            origin: source.to_string(),
            destination: destination.to_string(),
        }
    }

    /// Create an InsufficientStock error
    pub fn insufficient_stock(item: &str, available: Quantity, requested: Quantity) -> Self {
        InventoryError::InsufficientStock {
            item: item.to_string(),
            available,
            requested,
        }
    }

    /// Create a CapacityOverflow error
    pub fn capacity_overflow(item: &str, free: Quantity, requested: Quantity) -> Self {
        InventoryError::CapacityOverflow {
            item: item.to_string(),
            free,
            requested,
        }
    }

    /// Create a VarietyLimitExceeded error
    pub fn variety_limit_exceeded(item: &str, limit: usize) -> Self {
        InventoryError::VarietyLimitExceeded {
            item: item.to_string(),
            limit,
        }
    }

    /// Create a CompensationFailed error
    pub fn compensation_failed(item: &str, quantity: Quantity, location: &str) -> Self {
        InventoryError::CompensationFailed {
            item: item.to_string(),
            quantity,
            location: location.to_string(),
        }
    }

    /// Create an InvalidSeed error
    pub fn invalid_seed(reason: impl Into<String>) -> Self {
        InventoryError::InvalidSeed {
            reason: reason.into(),
        }
    }

    /// Whether the console should ask the user to retype the command
    ///
    /// True for errors caused by the command text itself or by its route,
    /// as opposed to errors raised while moving goods.
    pub fn is_retype(&self) -> bool {
        matches!(
            self,
            InventoryError::ParseError { .. }
                | InventoryError::InvalidQuantity { .. }
                | InventoryError::InvalidRoute { .. }
        )
    }

    /// Whether the destination refused the goods
    pub fn is_rejected_by_destination(&self) -> bool {
        matches!(
            self,
            InventoryError::CapacityOverflow { .. } | InventoryError::VarietyLimitExceeded { .. }
        )
    }
}
