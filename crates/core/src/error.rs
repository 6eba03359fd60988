//! Error types for kvstate
//!
//! This module defines the error type shared by the key codec, the host
//! store traits and the reference store.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for kvstate core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the state access layer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Missing or insufficient arguments, or an empty required field
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A composite key could not be decoded
    #[error("decode error: {0}")]
    Decode(String),

    /// The host store or one of its cursors failed
    #[error("storage unavailable: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl Error {
    /// Build an `InvalidArgument` error from anything string-like
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Error::InvalidArgument(reason.into())
    }

    /// Build a `Storage` error from anything string-like
    pub fn storage(reason: impl Into<String>) -> Self {
        Error::Storage(reason.into())
    }

    /// Build a `Decode` error from anything string-like
    pub fn decode(reason: impl Into<String>) -> Self {
        Error::Decode(reason.into())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
