//! Tracing initialization.
//!
//! Builds a compact, human-readable `tracing-subscriber` on stderr. The level
//! comes from the configuration file unless the command line overrides it.

use crate::config::LoggingConfig;
use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Level requested on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Only errors.
    Quiet,
    /// Use the configured level.
    Normal,
    /// Debug and above.
    Verbose,
}

/// Picks the effective level string.
pub fn effective_level(config: &LoggingConfig, verbosity: Verbosity) -> &str {
    match verbosity {
        Verbosity::Quiet => "error",
        Verbosity::Normal => config.level.as_str(),
        Verbosity::Verbose => "debug",
    }
}

/// Installs the global subscriber.
///
/// Fails if a subscriber is already installed.
pub fn init_tracing(config: &LoggingConfig, verbosity: Verbosity) -> Result<()> {
    let filter = EnvFilter::new(effective_level(config, verbosity));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(config.color)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .map_err(|e| anyhow!("failed to initialize logging: {e}"))
}
