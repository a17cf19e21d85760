//! File logging.
//!
//! The game owns the terminal, so log output goes to a file or nowhere.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;

/// Install the global subscriber if a log path is configured.
///
/// Returns whether logging was enabled. `RUST_LOG` takes precedence over the
/// configured filter.
pub fn init(config: &AppConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let log_file =
        File::create(path).with_context(|| format!("failed to create log file {path}"))?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    // Ignore a second init (tests may install their own subscriber).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    Ok(true)
}
