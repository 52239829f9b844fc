//! Error types for bblg-core

use thiserror::Error;

/// Result type alias using bblg-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in bblg-core operations
///
/// Date adjustment and catalog lookups never fail; these variants cover the
/// document, parsing, and lookup surfaces around them.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Event or version not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Document was written by a newer schema
    #[error("Unsupported log document version: {0}")]
    UnsupportedVersion(u32),
}
