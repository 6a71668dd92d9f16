//! # Inventory Error Types
//!
//! Error types for loading the inventory.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  io::Error / serde_yaml::Error / serde_json::Error / ValidationError   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  InventoryError (this module) ← Adds path and record context           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CliError (in app) ← Logged, process exits non-zero                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant is fatal: the store never opens over a partial inventory.

use std::path::PathBuf;

use shelf_core::ValidationError;
use thiserror::Error;

/// Inventory loading errors.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The file could not be read.
    ///
    /// ## When This Occurs
    /// - File doesn't exist
    /// - File permissions issue
    /// - Path is a directory
    #[error("Failed to read inventory file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The YAML document is malformed or lacks an `items` list.
    #[error("Malformed YAML inventory: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The JSON document is malformed or lacks an `items` list.
    #[error("Malformed JSON inventory: {0}")]
    Json(#[from] serde_json::Error),

    /// One or more records broke an inventory rule.
    ///
    /// All problems are collected so they can be fixed in one pass.
    #[error("Inventory has {} invalid record(s): {}", .0.len(), join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result type for inventory operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_message_lists_every_problem() {
        let err = InventoryError::Invalid(vec![
            ValidationError::Required {
                field: "name".to_string(),
            },
            ValidationError::Duplicate {
                field: "name".to_string(),
                value: "Aaaa".to_string(),
            },
        ]);
        assert_eq!(
            err.to_string(),
            "Inventory has 2 invalid record(s): name is required; name 'Aaaa' already exists"
        );
    }

    #[test]
    fn test_io_message_includes_path() {
        let err = InventoryError::Io {
            path: PathBuf::from("missing.yml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(
            err.to_string(),
            "Failed to read inventory file missing.yml: not found"
        );
    }
}
