//! Error types for the fallible edges of the crate.
//!
//! Comparing two texts never fails. Errors only come from parsing settings
//! and from serializing the rendered model.

use thiserror::Error;

/// Result type alias for sidediff operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur outside the alignment core.
#[derive(Error, Debug)]
pub enum Error {
    /// An algorithm name that is not one of `myers`, `patience` or `lcs`.
    #[error("Unknown diff algorithm: {0}")]
    UnknownAlgorithm(String),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
