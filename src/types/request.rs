//! Transfer request type
//!
//! A `TransferRequest` is produced by the command parser for every accepted
//! command line and consumed by the transfer coordinator.

use std::fmt;

/// Item quantity
///
/// Quantities are whole units; an inventory never stores a zero quantity.
pub type Quantity = u32;

/// A parsed "deliver N item from A to B" command
///
/// Location names are kept as typed by the user. Resolving them to actual
/// inventories is the coordinator's job, so an unknown name is not a parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    quantity: Quantity,
    product: String,
    source: String,
    destination: String,
}

impl TransferRequest {
    /// Create a new transfer request
    ///
    /// The parser guarantees `quantity > 0`; callers constructing requests
    /// directly are expected to uphold the same.
    pub fn new(
        quantity: Quantity,
        product: impl Into<String>,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        TransferRequest {
            quantity,
            product: product.into(),
            source: source.into(),
            destination: destination.into(),
        }
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    /// Name of the location the goods are taken from
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Name of the location the goods are delivered to
    pub fn destination(&self) -> &str {
        &self.destination
    }
}

impl fmt::Display for TransferRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "deliver {} {} from {} to {}",
            self.quantity, self.product, self.source, self.destination
        )
    }
}
