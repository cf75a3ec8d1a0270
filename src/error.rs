// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Invalid configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Invalid problem input in {path}: {reason}")]
    Input { path: PathBuf, reason: String },

    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl InspectError {
    pub(crate) fn io(source: std::io::Error, path: impl Into<PathBuf>) -> Self {
        Self::Io {
            source,
            path: path.into(),
        }
    }

    /// Configuration and input errors are the caller's fault and map to a
    /// distinct exit code.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Config { .. } | Self::Input { .. })
    }
}

pub type Result<T> = std::result::Result<T, InspectError>;
