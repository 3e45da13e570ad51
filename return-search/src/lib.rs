//! # Return Search
//!
//! Main library for the return-reason search module.
//!
//! This crate wires the read-path search client and the write-path publisher
//! together from environment configuration.

pub mod config;

pub use config::Dependencies;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Initialize tracing from the `RUST_LOG` environment variable.
///
/// Defaults to `info` when `RUST_LOG` is unset. Set `LOG_FORMAT=json` for
/// JSON-formatted output. Safe to call more than once; later calls are
/// no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var("LOG_FORMAT")
        .map(|format| format == "json")
        .unwrap_or(false);

    if use_json {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .try_init();
    } else {
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }
}

/// Errors that can occur during module initialization or execution.
#[derive(Error, Debug)]
pub enum ReturnSearchError {
    /// Configuration error.
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Search error.
    #[error("Search error: {0}")]
    SearchError(#[from] return_search_client::SearchError),

    /// Publish error.
    #[error("Publish error: {0}")]
    PublishError(#[from] return_search_publisher::PublishError),

    /// IO error.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ReturnSearchError {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::ConfigError(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_tracing_is_idempotent() {
        // A second call must be a no-op, not a panic.
        init_tracing();
        init_tracing();
    }
}
