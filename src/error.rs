//! Error types for the template usage core
//!
//! Lookups never error on absence: a record that is not found is a
//! normal "not in use" signal, surfaced as `None`. Errors are reserved
//! for the collaborator boundary (persistence, config files).

use thiserror::Error;

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, ScanError>;

/// Errors surfaced by the classification core and its collaborators
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("template not found: {id}")]
    TemplateNotFound { id: u64 },

    #[error("failed to {operation} for template {id}: {reason}")]
    Persist {
        operation: String,
        id: u64,
        reason: String,
    },

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}
