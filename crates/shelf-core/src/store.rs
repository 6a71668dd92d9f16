//! # Store
//!
//! Owns the inventory and the customer's cart. All searching and cart
//! mutation goes through here.
//!
//! ## Name Matching (add / remove)
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  query: "soap"                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  candidates = inventory names containing "soap"                        │
//! │       │                                                                 │
//! │       ├── none ─────────────────────────► ItemNotFound("soap")         │
//! │       │                                                                 │
//! │       ├── exactly one ──────────────────► that item                    │
//! │       │                                                                 │
//! │       └── several                                                       │
//! │             ├── one named "soap" ───────► that item                    │
//! │             └── none named "soap" ──────► TooManyMatches("soap")       │
//! │                                                                         │
//! │  add:    already in cart?  → ItemAlreadyExists(name)                   │
//! │  remove: not in cart?      → ItemNotFound(name)                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Search Ordering
//! Results skip items already in the cart and are sorted by descending
//! [affinity rank](ShoppingCart::affinity_rank), then by ascending name.

use tracing::debug;

use crate::cart::ShoppingCart;
use crate::error::{StoreError, StoreResult};
use crate::types::Item;

/// A store session: a fixed inventory and one cart.
#[derive(Debug, Clone, Default)]
pub struct Store {
    inventory: Vec<Item>,
    cart: ShoppingCart,
}

impl Store {
    /// Creates a store over a loaded inventory with an empty cart.
    pub fn new(inventory: Vec<Item>) -> Self {
        debug!(items = inventory.len(), "Store opened");
        Store {
            inventory,
            cart: ShoppingCart::new(),
        }
    }

    /// The inventory in load order.
    pub fn items(&self) -> &[Item] {
        &self.inventory
    }

    pub fn cart(&self) -> &ShoppingCart {
        &self.cart
    }

    /// Items whose name contains `query` and that are not in the cart.
    ///
    /// Matching is case-sensitive; an empty query matches every item.
    pub fn search_by_name(&self, query: &str) -> Vec<&Item> {
        let found = self
            .inventory
            .iter()
            .filter(|item| item.name().contains(query) && !self.cart.contains(item.name()))
            .collect();

        let results = self.rank(found);
        debug!(query = %query, count = results.len(), "Searched by name");
        results
    }

    /// Items tagged exactly `tag` that are not in the cart.
    pub fn search_by_hashtag(&self, tag: &str) -> Vec<&Item> {
        let found = self
            .inventory
            .iter()
            .filter(|item| item.has_hashtag(tag) && !self.cart.contains(item.name()))
            .collect();

        let results = self.rank(found);
        debug!(tag = %tag, count = results.len(), "Searched by hashtag");
        results
    }

    /// Resolves a partial name to a single inventory item.
    ///
    /// ## Errors
    /// - [`StoreError::ItemNotFound`] when no name contains `query`
    /// - [`StoreError::TooManyMatches`] when several names contain it and
    ///   none equals it
    pub fn resolve(&self, query: &str) -> StoreResult<&Item> {
        resolve_in(&self.inventory, query)
    }

    /// Adds the item matching `query` to the cart and returns it.
    ///
    /// ## Errors
    /// Everything [`resolve`](Self::resolve) returns, plus
    /// [`StoreError::ItemAlreadyExists`] when the item is already in the cart.
    pub fn add(&mut self, query: &str) -> StoreResult<&Item> {
        let item = resolve_in(&self.inventory, query)?;
        self.cart.add(item.clone())?;
        Ok(item)
    }

    /// Removes the item matching `query` from the cart and returns it.
    ///
    /// Matching runs against the whole inventory, not just the cart, so a
    /// query that is ambiguous in the inventory fails even if only one of the
    /// matches is in the cart.
    ///
    /// ## Errors
    /// Everything [`resolve`](Self::resolve) returns, plus
    /// [`StoreError::ItemNotFound`] when the item is not in the cart.
    pub fn remove(&mut self, query: &str) -> StoreResult<&Item> {
        let item = resolve_in(&self.inventory, query)?;
        self.cart.remove(item.name())?;
        Ok(item)
    }

    /// Total price of the cart. The cart is left as is.
    pub fn checkout(&self) -> u64 {
        let total = self.cart.subtotal();
        debug!(items = self.cart.len(), total, "Checkout");
        total
    }

    fn rank<'a>(&self, found: Vec<&'a Item>) -> Vec<&'a Item> {
        let counts = self.cart.tag_counts();
        let mut ranked: Vec<(usize, &Item)> = found
            .into_iter()
            .map(|item| (ShoppingCart::rank_with(&counts, item), item))
            .collect();

        ranked.sort_by(|(rank_a, a), (rank_b, b)| {
            rank_b.cmp(rank_a).then_with(|| a.name().cmp(b.name()))
        });

        ranked.into_iter().map(|(_, item)| item).collect()
    }
}

fn resolve_in<'a>(inventory: &'a [Item], query: &str) -> StoreResult<&'a Item> {
    let candidates: Vec<&Item> = inventory
        .iter()
        .filter(|item| item.name().contains(query))
        .collect();

    match candidates.as_slice() {
        [] => Err(StoreError::ItemNotFound(query.to_string())),
        [only] => Ok(*only),
        many => {
            debug!(
                query = %query,
                candidates = many.len(),
                "Ambiguous name, looking for exact match"
            );
            many.iter()
                .find(|item| item.name() == query)
                .copied()
                .ok_or_else(|| StoreError::TooManyMatches(query.to_string()))
        }
    }
}
