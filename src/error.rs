//! Error types for the I/O boundaries of the catalog.
//!
//! The derivation core (filtering, sorting, pagination) cannot fail. Errors
//! only arise where the crate touches the outside world: reading the catalog
//! document, the favorites store, configuration and log setup. Callers at
//! those boundaries absorb them into a degraded state.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Boundary error types
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Favorites store error: {message}")]
    Store { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Catalog file not found: {path}")]
    CatalogNotFound { path: PathBuf },
}

impl Error {
    pub fn store(message: impl Into<String>) -> Self {
        Self::Store {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
