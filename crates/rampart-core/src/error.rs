//! Error types for the fallible edges of the game: configuration loading.
//!
//! Gameplay itself never fails; rejected player actions are no-ops.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("path needs at least 2 waypoints, got {0}")]
    PathTooShort(usize),

    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
}
