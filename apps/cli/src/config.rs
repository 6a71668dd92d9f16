//! # Configuration
//!
//! Loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command-line flags (`--items`, `--quiet`)
//! 2. Environment variables (`SHELF_*`)
//! 3. Defaults (this file)
//!
//! `RUST_LOG`, when set, replaces the log filter entirely.

use std::env;
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

/// Default inventory file, relative to the working directory.
pub const DEFAULT_ITEMS_FILE: &str = "items.yml";

/// Default log filter when neither `RUST_LOG` nor `SHELF_LOG_FILTER` is set.
pub const DEFAULT_LOG_FILTER: &str = "warn,shelf=info";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShelfConfig {
    /// Inventory file (YAML or JSON)
    pub items_file: PathBuf,

    /// tracing-subscriber filter directives
    pub log_filter: String,

    /// Print the welcome banner and usage lines at session start
    pub show_banner: bool,
}

impl Default for ShelfConfig {
    fn default() -> Self {
        ShelfConfig {
            items_file: PathBuf::from(DEFAULT_ITEMS_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            show_banner: true,
        }
    }
}

impl ShelfConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = ShelfConfig::default();

        let config = ShelfConfig {
            items_file: lookup("SHELF_ITEMS_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.items_file),

            log_filter: lookup("SHELF_LOG_FILTER").unwrap_or(defaults.log_filter),

            show_banner: match lookup("SHELF_SHOW_BANNER") {
                Some(value) => value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SHELF_SHOW_BANNER".to_string()))?,
                None => defaults.show_banner,
            },
        };

        if config.items_file.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("SHELF_ITEMS_FILE".to_string()));
        }

        if EnvFilter::try_new(&config.log_filter).is_err() {
            return Err(ConfigError::InvalidValue("SHELF_LOG_FILTER".to_string()));
        }

        Ok(config)
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, items_file: Option<PathBuf>, quiet: bool) -> Self {
        if let Some(path) = items_file {
            self.items_file = path;
        }
        if quiet {
            self.show_banner = false;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
