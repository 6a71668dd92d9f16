//! # shelf-core: Pure Business Logic for Shelf
//!
//! This crate is the **heart** of Shelf. It holds the store's search-ranking
//! and cart-matching rules as pure computations over in-memory state.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Shelf Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  apps/cli (Session loop)                        │   │
//! │  │    read line ──► Command::parse ──► match Action ──► print     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ shelf-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │   store   │  │  command  │  │   │
//! │  │   │   Item    │  │ Shopping  │  │  search   │  │  Action   │  │   │
//! │  │   │           │  │   Cart    │  │  add/rm   │  │  Command  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO TERMINAL • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                ▲                                        │
//! │  ┌─────────────────────────────┴───────────────────────────────────┐   │
//! │  │               shelf-inventory (Loader Layer)                    │   │
//! │  │              items.yml / items.json → Vec<Item>                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - The immutable [`Item`] record
//! - [`cart`] - [`ShoppingCart`], subtotal and tag-affinity ranking
//! - [`store`] - [`Store`], search and fuzzy add/remove
//! - [`command`] - The enumerated command type for the session loop
//! - [`error`] - Domain error types
//! - [`validation`] - Inventory rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use shelf_core::{Item, Store};
//!
//! let mut store = Store::new(vec![
//!     Item::new("dish soap", 4, ["soap", "kitchen"], "Lemon scented"),
//!     Item::new("body soap", 6, ["soap", "bath"], "Unscented"),
//!     Item::new("sponge", 2, ["kitchen"], "Yellow and green"),
//! ]);
//!
//! store.add("dish").unwrap();
//!
//! // Items sharing tags with the cart come first.
//! let names: Vec<&str> = store.search_by_name("").iter().map(|i| i.name()).collect();
//! assert_eq!(names, ["body soap", "sponge"]);
//!
//! assert_eq!(store.checkout(), 4);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod command;
pub mod error;
pub mod store;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::ShoppingCart;
pub use command::{Action, Command, ParseCommandError};
pub use error::{StoreError, StoreResult, ValidationError};
pub use store::Store;
pub use types::Item;
