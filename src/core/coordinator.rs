//! Transfer coordination
//!
//! This module provides the `TransferCoordinator`, which owns both inventories
//! and moves goods between them.
//!
//! A transfer is two steps with a compensating action:
//! 1. Remove the goods from the source
//! 2. Add them to the destination; if that fails, add them back to the source
//!
//! A failed transfer therefore never changes the total quantity of an item
//! across both inventories.

use crate::core::bulk::BulkInventory;
use crate::core::limited::LimitedInventory;
use crate::core::traits::Inventory;
use crate::lexicon::Lexicon;
use crate::types::{InventoryError, Location, TransferRequest};
use tracing::{debug, error, warn};

/// Owns the store and the shop and executes transfers between them
///
/// The inventory types default to the store and shop policies; any pair of
/// `Inventory` implementations can be coordinated.
#[derive(Debug, Clone)]
pub struct TransferCoordinator<S = BulkInventory, D = LimitedInventory> {
    store: S,
    shop: D,
    lexicon: Lexicon,
}

impl TransferCoordinator {
    /// Create a coordinator whose inventories hold the lexicon's initial stock
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if the initial stock breaks an inventory invariant.
    pub fn seeded(lexicon: Lexicon) -> Result<Self, InventoryError> {
        let store = BulkInventory::with_items(lexicon.seed(Location::Store).iter().copied())?;
        let shop = LimitedInventory::with_items(lexicon.seed(Location::Shop).iter().copied())?;
        Ok(Self::new(store, shop, lexicon))
    }
}

impl<S: Inventory, D: Inventory> TransferCoordinator<S, D> {
    pub fn new(store: S, shop: D, lexicon: Lexicon) -> Self {
        TransferCoordinator {
            store,
            shop,
            lexicon,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn shop(&self) -> &D {
        &self.shop
    }

    pub fn lexicon(&self) -> Lexicon {
        self.lexicon
    }

    /// Read-only access to the inventory at `location`
    pub fn inventory(&self, location: Location) -> &dyn Inventory {
        match location {
            Location::Store => &self.store,
            Location::Shop => &self.shop,
        }
    }

    /// Resolve location names into a permitted route
    ///
    /// Only store → shop and shop → store are permitted. Unknown names and
    /// identical source/destination names yield `None`.
    pub fn resolve_locations(
        &self,
        source: &str,
        destination: &str,
    ) -> Option<(Location, Location)> {
        let from = self.lexicon.location_named(source)?;
        let to = self.lexicon.location_named(destination)?;
        (to == from.counterpart()).then_some((from, to))
    }

    /// Move the requested goods from the source to the destination
    ///
    /// # Returns
    ///
    /// * `Ok(())` if the goods were delivered
    /// * `Err(InventoryError)` describing why not
    ///
    /// # Errors
    ///
    /// - `InvalidRoute`: the names do not form a permitted route; nothing changes
    /// - `InsufficientStock`: the source lacks the goods; nothing changes
    /// - `CapacityOverflow` / `VarietyLimitExceeded`: the destination refused the
    ///   goods; they are returned to the source, so nothing changes
    /// - `CompensationFailed`: the source refused the goods back; they are lost
    ///   and the source keeps the reduced quantity
    pub fn execute_transfer(&mut self, request: &TransferRequest) -> Result<(), InventoryError> {
        let (from, _) = self
            .resolve_locations(request.source(), request.destination())
            .ok_or_else(|| {
                warn!(
                    source = request.source(),
                    destination = request.destination(),
                    "rejected transfer on unknown route"
                );
                InventoryError::invalid_route(request.source(), request.destination())
            })?;

        let product = request.product();
        let quantity = request.quantity();
        let (source, destination) = self.route_mut(from);

        if let Err(e) = source.remove(product, quantity) {
            warn!(error = %e, "source could not supply goods");
            return Err(e);
        }

        if let Err(refused) = destination.add(product, quantity) {
            warn!(error = %refused, "destination refused goods, returning them to source");
            if let Err(e) = source.add(product, quantity) {
                error!(error = %e, product, quantity, "goods lost while returning them to source");
                return Err(InventoryError::compensation_failed(
                    product,
                    quantity,
                    request.source(),
                ));
            }
            return Err(refused);
        }

        debug!(
            product,
            quantity,
            source = request.source(),
            destination = request.destination(),
            "transfer delivered"
        );
        Ok(())
    }

    /// Mutable source and destination inventories for a route starting at `from`
    fn route_mut(&mut self, from: Location) -> (&mut dyn Inventory, &mut dyn Inventory) {
        match from {
            Location::Store => (&mut self.store, &mut self.shop),
            Location::Shop => (&mut self.shop, &mut self.store),
        }
    }
}
