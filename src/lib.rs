//! Reversi engine library.
//!
//! Exposes the board engine, move generation, strategies, player adapters,
//! configuration, and self-play modules for use by integration tests and the
//! binaries.

pub mod board;
pub mod config;
pub mod eval;
pub mod movegen;
pub mod player;
pub mod selfplay;
pub mod strategy;

use tracing_subscriber::EnvFilter;

/// Installs the stderr log subscriber used by the binaries. The filter comes
/// from `RUST_LOG` and defaults to `warn`.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
