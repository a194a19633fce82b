//! Crate-level error types.
//!
//! The lint pipeline itself never returns these to callers: every failure
//! there degrades to fewer diagnostics. They cover the fallible edges around
//! it, namely configuration loading and the driver binary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for the expected schema.
    #[error("Failed to parse config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
}

/// Top-level error for fallible crate operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize output: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for crate operations.
pub type Result<T> = std::result::Result<T, BridgeError>;
