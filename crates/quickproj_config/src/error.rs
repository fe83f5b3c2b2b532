//! Error types for configuration handling.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that can occur while locating, reading or validating a config file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write config file {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in config file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },

    #[error("Invalid config file {}: field `{field}` {message}", .path.display())]
    Invalid {
        path: PathBuf,
        field: String,
        message: String,
    },

    #[error("Could not determine home directory")]
    NoHomeDirectory,

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfigError {
    /// Path of the config file the error refers to, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Self::NotFound(path) => Some(path),
            Self::Read { path, .. }
            | Self::Write { path, .. }
            | Self::Parse { path, .. }
            | Self::Invalid { path, .. } => Some(path),
            Self::NoHomeDirectory | Self::Json(_) => None,
        }
    }
}
