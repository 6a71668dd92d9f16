//! # CLI Error Type
//!
//! Startup and terminal failures that end the process.
//!
//! ```text
//! InventoryError ──┐
//! ConfigError ─────┼──► CliError ──► logged by run(), exit code 1
//! io::Error ───────┘
//! ```
//!
//! Store errors never reach this type: the session prints them and keeps
//! going.

use shelf_inventory::InventoryError;
use thiserror::Error;

use crate::config::ConfigError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// Reading stdin or writing stdout failed.
    #[error("Terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type CliResult<T> = Result<T, CliError>;
