//! Tracing subscriber setup

use anyhow::Result;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Install a formatted subscriber for the whole process
///
/// `RUST_LOG` wins when set; otherwise `default_filter` is used, e.g.
/// `"info,router=debug"`. Fails if a global subscriber is already
/// installed or the directive does not parse.
pub fn init_logging(default_filter: &str) -> Result<()> {
    let filter = build_env_filter(default_filter)?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .map_err(anyhow::Error::msg)?;

    tracing::debug!(filter = default_filter, "Logging initialized");
    Ok(())
}

fn build_env_filter(default_filter: &str) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => Ok(EnvFilter::try_new(default_filter)?),
    }
}
