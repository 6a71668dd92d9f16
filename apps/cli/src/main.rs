//! # Shelf Entry Point
//!
//! ```bash
//! # Use ./items.yml
//! shelf
//!
//! # Another inventory, no banner
//! shelf --items data/items.yml --quiet
//!
//! # Debug logging on stderr
//! RUST_LOG=shelf=debug shelf
//! ```

use std::process::ExitCode;

fn main() -> ExitCode {
    // The actual setup is in lib.rs for better testability
    shelf_cli::run()
}
