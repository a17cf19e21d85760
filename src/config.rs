//! Runtime configuration read from the environment.
//!
//! Bad or missing values fall back to defaults; configuration never fails.

use std::time::{SystemTime, UNIX_EPOCH};

pub const ENV_SEED: &str = "MASTERMIND_SEED";
pub const ENV_LOG_PATH: &str = "MASTERMIND_LOG_PATH";
pub const ENV_LOG_FILTER: &str = "MASTERMIND_LOG";

pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Seed for the secret pattern generator.
    pub seed: u32,
    /// Log file; `None` disables logging.
    pub log_path: Option<String>,
    /// Filter directive used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl AppConfig {
    /// Create from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let seed = lookup(ENV_SEED)
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let log_path = lookup(ENV_LOG_PATH)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_filter = lookup(ENV_LOG_FILTER)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

        Self {
            seed,
            log_path,
            log_filter,
        }
    }
}

/// Seed derived from the wall clock, folded to 32 bits.
fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(0);
    (nanos ^ (nanos >> 32)) as u32
}
