//! Logging utilities
//!
//! Provides logging setup for embedding layers.

use env_logger::Env;

/// Initialize the process-wide logger.
///
/// Defaults to `info`; `RUST_LOG` overrides.
pub fn setup_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}
