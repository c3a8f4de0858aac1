//! Limited inventory ("shop")
//!
//! Small capacity and a cap on the number of distinct items. A new item is
//! refused once the cap is reached, before free space is even considered.

use crate::core::stock::{seed_with, Stock};
use crate::core::traits::Inventory;
use crate::types::{InventoryError, Quantity};

/// Default capacity of the shop
pub const SHOP_CAPACITY: Quantity = 20;

/// Maximum number of distinct items the shop may hold
pub const SHOP_VARIETY_LIMIT: usize = 5;

/// Small-capacity inventory with a variety limit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LimitedInventory {
    stock: Stock,
    variety_limit: usize,
}

impl LimitedInventory {
    /// Create an empty shop with the default capacity and variety limit
    pub fn new() -> Self {
        Self::with_limits(SHOP_CAPACITY, SHOP_VARIETY_LIMIT)
    }

    pub fn with_limits(capacity: Quantity, variety_limit: usize) -> Self {
        LimitedInventory {
            stock: Stock::new(capacity),
            variety_limit,
        }
    }

    /// Create a shop with the default limits holding a copy of `items`
    ///
    /// # Errors
    ///
    /// Returns `InvalidSeed` if an entry has a zero quantity, the entries
    /// exceed the capacity, or they name more distinct items than allowed.
    pub fn with_items<I, S>(items: I) -> Result<Self, InventoryError>
    where
        I: IntoIterator<Item = (S, Quantity)>,
        S: AsRef<str>,
    {
        let mut inventory = Self::new();
        seed_with(items, |item, quantity| inventory.add(item, quantity))?;
        Ok(inventory)
    }

    pub fn variety_limit(&self) -> usize {
        self.variety_limit
    }
}

impl Default for LimitedInventory {
    fn default() -> Self {
        Self::new()
    }
}

impl Inventory for LimitedInventory {
    fn add(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        if self.stock.unique_item_count() >= self.variety_limit && !self.stock.contains(item) {
            return Err(InventoryError::variety_limit_exceeded(
                item,
                self.variety_limit,
            ));
        }
        self.stock.add(item, quantity)
    }

    fn remove(&mut self, item: &str, quantity: Quantity) -> Result<(), InventoryError> {
        self.stock.remove(item, quantity)
    }

    fn stock(&self) -> &Stock {
        &self.stock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    fn full_variety_shop() -> LimitedInventory {
        LimitedInventory::with_items([("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1)])
            .unwrap()
    }

    #[test]
    fn test_new_uses_default_limits() {
        let shop = LimitedInventory::new();
        assert_eq!(shop.capacity(), 20);
        assert_eq!(shop.variety_limit(), 5);
    }

    #[test]
    fn test_sixth_distinct_item_is_refused_despite_free_space() {
        let mut shop = full_variety_shop();
        assert_eq!(shop.free_space(), 15);

        let result = shop.add("f", 1);

        assert_eq!(
            result.unwrap_err(),
            InventoryError::variety_limit_exceeded("f", 5)
        );
        assert_eq!(shop.unique_item_count(), 5);
    }

    #[test]
    fn test_known_item_accepted_at_variety_limit() {
        let mut shop = full_variety_shop();
        assert!(shop.add("a", 4).is_ok());
        assert_eq!(shop.quantity_of("a"), 5);
    }

    #[test]
    fn test_slot_frees_up_after_item_removed() {
        let mut shop = full_variety_shop();
        shop.remove("c", 1).unwrap();
        assert!(shop.add("f", 2).is_ok());
    }

    #[rstest]
    #[case::fits(5, true)]
    #[case::exact(13, true)]
    #[case::overflow(14, false)]
    fn test_capacity_check(#[case] quantity: Quantity, #[case] accepted: bool) {
        let mut shop = LimitedInventory::with_items([("cookies", 2), ("dog", 5)]).unwrap();
        assert_eq!(shop.add("apple", quantity).is_ok(), accepted);
    }

    #[test]
    fn test_with_items_rejects_too_many_distinct_items() {
        let seed = [("a", 1), ("b", 1), ("c", 1), ("d", 1), ("e", 1), ("f", 1)];
        let result = LimitedInventory::with_items(seed);
        assert!(matches!(result, Err(InventoryError::InvalidSeed { .. })));
    }

    const NAMES: [&str; 9] = ["a", "b", "c", "d", "e", "f", "g", "h", "i"];

    proptest! {
        /// Property: capacity and variety limits hold after any sequence of operations
        #[test]
        fn limits_hold(
            ops in prop::collection::vec((0..NAMES.len(), 0..8u32, any::<bool>()), 0..100)
        ) {
            let mut shop = LimitedInventory::new();
            for (index, quantity, adding) in ops {
                let _ = if adding {
                    shop.add(NAMES[index], quantity)
                } else {
                    shop.remove(NAMES[index], quantity)
                };
                prop_assert!(shop.stock().total_quantity() <= shop.capacity());
                prop_assert!(shop.unique_item_count() <= SHOP_VARIETY_LIMIT);
            }
        }
    }
}
