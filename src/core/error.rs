//! Error types and error handling for the Tadpole FAQ service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! is handled in the HTTP adapter.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for Tadpole operations
pub type Result<T> = std::result::Result<T, TadpoleError>;

/// Main error type for the Tadpole service
#[derive(Error, Debug)]
pub enum TadpoleError {
    #[error("IO error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot parse line {line} of {path}: {content:?}")]
    Parse {
        path: String,
        line: usize,
        content: String,
    },

    #[error("Tokenization failed ({backend}): {message}")]
    Tokenization {
        backend: &'static str,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Background task failed: {0}")]
    TaskFailed(String),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl TadpoleError {
    /// Build an IO error tied to the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TadpoleError::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a tokenization error for the named backend
    pub fn tokenization(backend: &'static str, message: impl Into<String>) -> Self {
        TadpoleError::Tokenization {
            backend,
            message: message.into(),
        }
    }

    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            TadpoleError::InvalidQuery(_) | TadpoleError::ConfigError(_)
        )
    }

    /// Check if this error aborts a corpus load cycle
    pub fn is_load_failure(&self) -> bool {
        matches!(
            self,
            TadpoleError::Io { .. } | TadpoleError::Parse { .. } | TadpoleError::Tokenization { .. }
        )
    }
}
