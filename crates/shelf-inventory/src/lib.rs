//! # shelf-inventory: Inventory Loading for Shelf
//!
//! Reads the store's inventory file once at startup and hands validated
//! [`Item`](shelf_core::Item)s to the core.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Shelf Startup Flow                               │
//! │                                                                         │
//! │  apps/cli main                                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 shelf-inventory (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │    loader     │    │  validation   │    │    error     │  │   │
//! │  │   │ YAML / JSON   │───►│ (shelf-core)  │───►│ Inventory-   │  │   │
//! │  │   │ RawItem       │    │ price, names  │    │ Error        │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store::new(items)                                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use shelf_inventory::open_store;
//!
//! let mut store = open_store("items.yml")?;
//! store.add("dish soap")?;
//! println!("{}", store.checkout());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod loader;

pub use error::{InventoryError, InventoryResult};
pub use loader::{load_inventory, open_store, parse_inventory, InventoryFormat};
