//! Error types for oas-style.

use thiserror::Error;

/// Errors surfaced by the loader, the configuration layer and the engine.
///
/// Style findings are never reported through this type. They are returned
/// as [`crate::lint::Violation`] values; an `OasError` means the run itself
/// could not produce a trustworthy result.
#[derive(Debug, Error)]
pub enum OasError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("configuration error: {0}")]
    Config(String),

    /// The document lacks a section the rules require to exist.
    #[error("invalid document: {0}")]
    InvalidDocument(String),

    #[error("validation failed: {0}")]
    ValidationFailed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, OasError>;
