//! Logging setup.
//!
//! Events go to stderr so that stdout only ever carries the completion notice.
//! `RUST_LOG` takes precedence when set; otherwise the level is WARN, or DEBUG
//! with `--debug`.

use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Installs the global fmt subscriber.
pub fn init(debug: bool) -> Result<()> {
    let default = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
