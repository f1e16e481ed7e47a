//! Process-wide tracing setup.
//!
//! `RUST_LOG` wins when set; otherwise the configured filter is used, raised
//! to `debug` for this crate when running verbose.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

pub fn init(filter: &str, verbose: bool) -> Result<()> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            let directive = if verbose {
                format!("{filter},expenses=debug,tower_http=debug")
            } else {
                filter.to_string()
            };
            EnvFilter::try_new(&directive)
                .map_err(|e| anyhow!("Invalid log filter '{}': {}", directive, e))?
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow!("Failed to initialize logging: {}", e))
}
