//! # Shopping Cart
//!
//! The customer's cart and its tag-affinity ranking.
//!
//! ## Affinity Ranking
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Cart:  Shopping Cart 1 [H1]      Shopping Cart 2 [H1]                 │
//! │                                                                         │
//! │  tag_counts()  ──►  { H1: 2 }                                          │
//! │                                                                         │
//! │  affinity_rank(Bbbb [H1])  = counts[H1]      = 2                       │
//! │  affinity_rank(Aaaa [])    = (no tags)       = 0                       │
//! │  affinity_rank(Xxxx [H2])  = counts[H2] = ∅  = 0                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::types::Item;

/// The shopping cart.
///
/// ## Invariants
/// - Entries are unique by item name
/// - Every entry's key equals its item's name
#[derive(Debug, Clone, Default)]
pub struct ShoppingCart {
    items: BTreeMap<String, Item>,
}

impl ShoppingCart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an item to the cart.
    ///
    /// ## Errors
    /// [`StoreError::ItemAlreadyExists`] if an item with the same name is present.
    pub fn add(&mut self, item: Item) -> StoreResult<()> {
        if self.items.contains_key(item.name()) {
            return Err(StoreError::ItemAlreadyExists(item.name().to_string()));
        }

        debug!(item = %item.name(), price = item.price(), "Adding item to cart");
        self.items.insert(item.name().to_string(), item);
        Ok(())
    }

    /// Removes the item with the given name and returns it.
    ///
    /// ## Errors
    /// [`StoreError::ItemNotFound`] if no entry has that name.
    pub fn remove(&mut self, name: &str) -> StoreResult<Item> {
        let item = self
            .items
            .remove(name)
            .ok_or_else(|| StoreError::ItemNotFound(name.to_string()))?;

        debug!(item = %name, "Removed item from cart");
        Ok(item)
    }

    /// Sum of the prices of every entry; 0 when empty.
    ///
    /// Cannot overflow for a cart filled from a loaded inventory, whose total
    /// price is checked by
    /// [`validate_total_price`](crate::validation::validate_total_price).
    pub fn subtotal(&self) -> u64 {
        self.items.values().map(Item::price).sum()
    }

    /// Number of cart items carrying each hashtag.
    pub fn tag_counts(&self) -> HashMap<&str, usize> {
        let mut counts = HashMap::new();
        for tag in self.items.values().flat_map(|item| item.hashtags()) {
            *counts.entry(tag.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// How close `item` is to the current cart contents.
    ///
    /// Sums, over each of the item's hashtags, the number of cart items that
    /// carry the same hashtag. A tag shared with three cart items adds 3.
    pub fn affinity_rank(&self, item: &Item) -> usize {
        if self.items.is_empty() {
            return 0;
        }

        let counts = self.tag_counts();
        Self::rank_with(&counts, item)
    }

    /// Rank against precomputed counts. Lets a search compute
    /// [`tag_counts`](Self::tag_counts) once for all candidates.
    pub(crate) fn rank_with(counts: &HashMap<&str, usize>, item: &Item) -> usize {
        item.hashtags()
            .iter()
            .filter_map(|tag| counts.get(tag.as_str()))
            .sum()
    }

    /// Checks whether an item with this name is in the cart.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.items.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.get(name)
    }

    /// Cart entries ordered by name.
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Returns the number of entries in the cart.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, price: u64, tags: &[&str]) -> Item {
        Item::new(name, price, tags.iter().copied(), format!("{} description", name))
    }

    #[test]
    fn test_empty_cart_subtotal_is_zero() {
        assert_eq!(ShoppingCart::new().subtotal(), 0);
    }

    #[test]
    fn test_empty_cart_rank_is_zero() {
        let cart = ShoppingCart::new();
        assert_eq!(cart.affinity_rank(&item("Bbbb", 1, &["H1", "H2"])), 0);
        assert!(cart.tag_counts().is_empty());
    }

    #[test]
    fn test_remove_non_existing_item() {
        let err = ShoppingCart::new().remove("some_name").unwrap_err();
        assert_eq!(err, StoreError::ItemNotFound("some_name".to_string()));
    }

    #[test]
    fn test_add_item_twice() {
        let mut cart = ShoppingCart::new();
        let milk = item("Milk", 3, &["dairy"]);

        cart.add(milk.clone()).unwrap();
        let err = cart.add(milk).unwrap_err();

        assert_eq!(err, StoreError::ItemAlreadyExists("Milk".to_string()));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_correct_subtotal() {
        let mut cart = ShoppingCart::new();
        cart.add(item("Milk", 3, &[])).unwrap();
        cart.add(item("Bread", 5, &[])).unwrap();
        cart.add(item("Free sample", 0, &[])).unwrap();

        assert_eq!(cart.subtotal(), 8);
    }

    #[test]
    fn test_add_and_remove_same_item() {
        let mut cart = ShoppingCart::new();
        cart.add(item("Bread", 5, &[])).unwrap();
        let before = cart.subtotal();

        cart.add(item("Milk", 3, &[])).unwrap();
        let removed = cart.remove("Milk").unwrap();

        assert_eq!(removed.name(), "Milk");
        assert_eq!(cart.subtotal(), before);
        assert!(!cart.contains("Milk"));
    }

    #[test]
    fn test_tag_counts_repeat_shared_tags() {
        let mut cart = ShoppingCart::new();
        cart.add(item("Shopping Cart 1", 1, &["H1"])).unwrap();
        cart.add(item("Shopping Cart 2", 1, &["H1", "H2"])).unwrap();

        let counts = cart.tag_counts();
        assert_eq!(counts.get("H1"), Some(&2));
        assert_eq!(counts.get("H2"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_affinity_rank_weights_by_frequency() {
        let mut cart = ShoppingCart::new();
        cart.add(item("Shopping Cart 1", 1, &["H1"])).unwrap();
        cart.add(item("Shopping Cart 2", 1, &["H1", "H2"])).unwrap();

        assert_eq!(cart.affinity_rank(&item("Bbbb", 1, &["H1"])), 2);
        assert_eq!(cart.affinity_rank(&item("Dddd", 1, &["H1", "H2"])), 3);
        assert_eq!(cart.affinity_rank(&item("Eeee", 1, &["H3"])), 0);
        assert_eq!(cart.affinity_rank(&item("Aaaa", 1, &[])), 0);
    }

    #[test]
    fn test_items_are_keyed_by_name() {
        let mut cart = ShoppingCart::new();
        cart.add(item("Milk", 3, &[])).unwrap();
        cart.add(item("Bread", 5, &[])).unwrap();

        let names: Vec<&str> = cart.items().map(Item::name).collect();
        assert_eq!(names, ["Bread", "Milk"]);
        assert_eq!(cart.get("Milk").map(Item::price), Some(3));
        assert!(cart.get("Eggs").is_none());
    }
}
