//! # Shelf CLI Library
//!
//! Startup wiring for the `shelf` binary.
//!
//! ## Module Organization
//! ```text
//! shelf_cli/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── config.rs       ◄─── Environment configuration
//! ├── session.rs      ◄─── Prompt / dispatch loop
//! └── error.rs        ◄─── Startup error type
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Parse flags, load SHELF_* environment ──────────────────────────►  │
//! │  2. Initialize tracing (stderr, RUST_LOG or configured filter) ─────►  │
//! │  3. Load inventory file (fatal on any error) ───────────────────────►  │
//! │  4. Run the session over stdin / stdout ────────────────────────────►  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod session;

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::ShelfConfig;
use error::CliResult;
use session::{Session, SessionEnd};

/// Command-line flags.
#[derive(Debug, Parser)]
#[command(name = "shelf")]
#[command(author, version, about = "Search the shelf, fill a cart and check out")]
pub struct Cli {
    /// Inventory file (YAML or JSON). Overrides SHELF_ITEMS_FILE.
    #[arg(short, long, value_name = "FILE")]
    pub items: Option<PathBuf>,

    /// Skip the welcome banner
    #[arg(short, long)]
    pub quiet: bool,
}

/// Runs the application and maps the outcome to a process exit code.
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let config = match ShelfConfig::load() {
        Ok(config) => config.with_overrides(cli.items, cli.quiet),
        Err(e) => {
            // Logging is not up yet.
            eprintln!("shelf: {}", e);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);
    info!(items_file = %config.items_file.display(), "Starting Shelf");

    match start(&config) {
        Ok(end) => {
            info!(?end, "Session finished");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Shelf stopped");
            eprintln!("shelf: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Loads the inventory and runs one session over the terminal.
pub fn start(config: &ShelfConfig) -> CliResult<SessionEnd> {
    let store = shelf_inventory::open_store(&config.items_file)?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session =
        Session::new(store, stdin.lock(), stdout.lock()).with_banner(config.show_banner);

    Ok(session.run()?)
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=shelf=trace` - Show trace for shelf crates only
/// - Default: the configured filter (`warn,shelf=info`)
///
/// Logs go to stderr so stdout carries only the customer dialogue.
fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
