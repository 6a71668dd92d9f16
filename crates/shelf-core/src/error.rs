//! # Error Types
//!
//! Domain-specific error types for shelf-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  shelf-core errors (this file)                                         │
//! │  ├── StoreError       - Cart / matching rule violations                │
//! │  └── ValidationError  - Inventory record failures                      │
//! │                                                                         │
//! │  shelf-inventory errors (separate crate)                               │
//! │  └── InventoryError   - File reading / parsing failures                │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── CliError         - Startup failures reported by main              │
//! │                                                                         │
//! │  StoreError is shown per command; the session keeps running.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include the offending name or query in the message
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Store Error
// =============================================================================

/// Errors raised by [`Store`](crate::Store) and [`ShoppingCart`](crate::ShoppingCart)
/// operations.
///
/// These are user-input correctness signals, not transient failures. They are
/// never retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No item matches, or the matched item is not in the cart.
    ///
    /// ## When This Occurs
    /// - No inventory name contains the query
    /// - Removing an item that was never added
    #[error("Item {0} does not exist in the shopping cart.")]
    ItemNotFound(String),

    /// The resolved item is already a cart entry.
    #[error("Item {0} already exists in the shopping cart.")]
    ItemAlreadyExists(String),

    /// The query is a substring of several names and none matches exactly.
    ///
    /// ## User Workflow
    /// ```text
    /// add_item soap
    ///      │
    ///      ▼
    /// candidates: "dish soap", "body soap"
    ///      │
    ///      ▼
    /// TooManyMatches("soap")
    ///      │
    ///      ▼
    /// Session prints: Too many matches for the item name "soap".
    /// ```
    #[error("Too many matches for the item name \"{0}\".")]
    TooManyMatches(String),
}

impl StoreError {
    /// Returns the item name or query the error refers to.
    pub fn subject(&self) -> &str {
        match self {
            StoreError::ItemNotFound(name)
            | StoreError::ItemAlreadyExists(name)
            | StoreError::TooManyMatches(name) => name,
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Inventory record validation errors.
///
/// Raised while turning raw records into [`Item`](crate::Item)s, before a
/// [`Store`](crate::Store) is built.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Value must not be negative.
    #[error("{field} of '{item}' must not be negative (got {value})")]
    Negative {
        field: String,
        item: String,
        value: f64,
    },

    /// Invalid format (e.g. a non-numeric price).
    #[error("{field} of '{item}' has invalid format: {reason}")]
    InvalidFormat {
        field: String,
        item: String,
        reason: String,
    },

    /// Duplicate value (e.g. two items with the same name).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },

    /// The sum of a field over the whole inventory does not fit in a `u64`.
    #[error("total {field} of the inventory is too large")]
    TotalOverflow { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with StoreError.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
