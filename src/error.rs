//! Error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PolicyError {
    /// A dynamically typed value was not a string.
    #[error("Password must be a string, got {found}")]
    InvalidInputType { found: &'static str },
    #[error("Invalid minimum length: {0:?} (expected a positive integer)")]
    InvalidMinLength(String),
    #[error("Malformed JSON input: {0}")]
    MalformedInput(#[from] serde_json::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
