//! # Domain Types
//!
//! The inventory entity used throughout Shelf.
//!
//! ```text
//! ┌─────────────────────────┐
//! │          Item           │
//! │  ─────────────────────  │
//! │  name (unique key)      │
//! │  price (integer)        │
//! │  hashtags (set)         │
//! │  description            │
//! └─────────────────────────┘
//! ```
//!
//! Items are created once when the inventory is loaded and never change
//! afterwards, so the fields are private and only readable through accessors.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

// =============================================================================
// Item
// =============================================================================

/// A product on the shelf.
///
/// `name` is the business identifier: it keys cart membership and is assumed
/// unique across the inventory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    name: String,
    price: u64,
    hashtags: BTreeSet<String>,
    description: String,
}

impl Item {
    /// Creates an item. Repeated hashtags collapse into one.
    pub fn new<I, T>(
        name: impl Into<String>,
        price: u64,
        hashtags: I,
        description: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Item {
            name: name.into(),
            price,
            hashtags: hashtags.into_iter().map(Into::into).collect(),
            description: description.into(),
        }
    }

    /// Display name; also the cart key.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Price as a whole number of currency units.
    #[inline]
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Hashtags in lexicographic order.
    #[inline]
    pub fn hashtags(&self) -> &BTreeSet<String> {
        &self.hashtags
    }

    #[inline]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Checks for an exact hashtag match. `"paper"` does not match `"tissue paper"`.
    #[inline]
    pub fn has_hashtag(&self, tag: &str) -> bool {
        self.hashtags.contains(tag)
    }
}

/// Customer-facing listing used by the session's search output.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Name:\t\t\t{}", self.name)?;
        writeln!(f, "Price:\t\t\t{}", self.price)?;
        write!(f, "Description:\t{}", self.description)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
