//! # Validation Module
//!
//! Rules an inventory record must satisfy before it becomes an [`Item`].
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: shelf-inventory                                              │
//! │  ├── Structure (serde): items list, field types                        │
//! │  └── Calls into THIS MODULE per record                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Per record: name, price coercion, hashtag duplicates              │
//! │  └── Whole inventory: unique names, overlapping names                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Assumes a clean inventory; matching rules apply literally         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashSet;

use serde::Deserialize;

use crate::error::ValidationError;
use crate::types::Item;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Record Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must not be empty or only whitespace
///
/// ## Example
/// ```rust
/// use shelf_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Dish soap").is_ok());
/// assert!(validate_item_name("  ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

/// Validates that a record lists each hashtag once.
pub fn validate_hashtags(item: &str, hashtags: &[String]) -> ValidationResult<()> {
    let mut seen = HashSet::new();
    for tag in hashtags {
        if !seen.insert(tag.as_str()) {
            return Err(ValidationError::Duplicate {
                field: format!("hashtag of '{}'", item),
                value: tag.clone(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Price Coercion
// =============================================================================

/// A price as written in an inventory file.
///
/// Files may hold whole numbers, decimals or numeric strings; all are coerced
/// to a whole price.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    Whole(i64),
    Fractional(f64),
    Text(String),
}

impl RawPrice {
    /// Coerces to a whole, non-negative price.
    ///
    /// ## Rules
    /// - Decimals are truncated toward zero (`4.99` → `4`)
    /// - Strings must hold a whole number (`"12"` → `12`, `"4.5"` is rejected)
    /// - Negative, non-finite or out-of-range values are rejected
    ///
    /// ## Example
    /// ```rust
    /// use shelf_core::validation::RawPrice;
    ///
    /// assert_eq!(RawPrice::Fractional(4.99).to_price("Milk"), Ok(4));
    /// assert_eq!(RawPrice::Text(" 12 ".into()).to_price("Milk"), Ok(12));
    /// assert!(RawPrice::Whole(-1).to_price("Milk").is_err());
    /// ```
    pub fn to_price(&self, item: &str) -> ValidationResult<u64> {
        match self {
            RawPrice::Whole(value) => whole_price(item, *value),
            RawPrice::Fractional(value) => {
                if !value.is_finite() {
                    return Err(invalid_price(item, "must be a finite number"));
                }
                if *value < 0.0 {
                    return Err(negative_price(item, *value));
                }
                if *value >= u64::MAX as f64 {
                    return Err(invalid_price(item, "is too large"));
                }
                Ok(value.trunc() as u64)
            }
            RawPrice::Text(text) => {
                let value: i64 = text
                    .trim()
                    .parse()
                    .map_err(|_| {
                    invalid_price(item, &format!("'{}' is not a whole number", text))
                })?;
                whole_price(item, value)
            }
        }
    }
}

fn whole_price(item: &str, value: i64) -> ValidationResult<u64> {
    u64::try_from(value).map_err(|_| negative_price(item, value as f64))
}

fn negative_price(item: &str, value: f64) -> ValidationError {
    ValidationError::Negative {
        field: "price".to_string(),
        item: item.to_string(),
        value,
    }
}

fn invalid_price(item: &str, reason: &str) -> ValidationError {
    ValidationError::InvalidFormat {
        field: "price".to_string(),
        item: item.to_string(),
        reason: reason.to_string(),
    }
}

// =============================================================================
// Inventory Validators
// =============================================================================

/// Returns one error per repeated item name.
pub fn validate_unique_names(items: &[Item]) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| !seen.insert(item.name()))
        .map(|item| ValidationError::Duplicate {
            field: "name".to_string(),
            value: item.name().to_string(),
        })
        .collect()
}

/// Sum of every item's price.
///
/// Any cart is a subset of the inventory, so an inventory that passes this
/// check can never overflow [`ShoppingCart::subtotal`](crate::ShoppingCart::subtotal).
pub fn validate_total_price(items: &[Item]) -> ValidationResult<u64> {
    items
        .iter()
        .try_fold(0u64, |total, item| total.checked_add(item.price()))
        .ok_or_else(|| ValidationError::TotalOverflow {
            field: "price".to_string(),
        })
}

/// Pairs `(shorter, longer)` where one item's name is contained in another's.
///
/// The store assumes this never happens. It is not an error, but a query
/// equal to `shorter` can only ever reach `shorter` through the exact-match
/// rule.
pub fn overlapping_names(items: &[Item]) -> Vec<(&str, &str)> {
    let mut pairs = Vec::new();
    for (i, a) in items.iter().enumerate() {
        for b in items.iter().skip(i + 1) {
            if a.name() == b.name() {
                continue;
            }
            if b.name().contains(a.name()) {
                pairs.push((a.name(), b.name()));
            } else if a.name().contains(b.name()) {
                pairs.push((b.name(), a.name()));
            }
        }
    }
    pairs
}

// =============================================================================
// Unit Tests
// =============================================================================
