//! Error types for command execution.
//!
//! All errors from command execution are represented by the [`Error`] enum.
//! These errors are:
//! - **Structured**: Each variant has typed fields for error details
//! - **Serializable**: Can be converted to/from JSON
//! - **Lossless**: No error information is lost in conversion from core errors

use serde::{Deserialize, Serialize};

/// Command execution errors.
///
/// # Categories
///
/// | Category | Variants | Description |
/// |----------|----------|-------------|
/// | Routing | `UnsupportedOperation` | Unknown operation name |
/// | Validation | `InvalidArgument` | Missing arguments, empty required field, limits |
/// | Keys | `Decode` | Composite key cannot be decoded |
/// | System | `StorageUnavailable`, `Serialization` | Host store or encoding failures |
///
/// # Example
///
/// ```ignore
/// use kvstate_executor::{Command, Error, Executor};
///
/// match executor.execute(cmd) {
///     Ok(output) => { /* handle success */ }
///     Err(Error::UnsupportedOperation { name }) => {
///         println!("no operation named '{}'", name);
///     }
///     Err(e) => {
///         println!("Error: {}", e);
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // ==================== Routing ====================
    /// Unknown operation name
    #[error("no operation found of name: {name}")]
    UnsupportedOperation {
        /// The operation name that was requested
        name: String,
    },

    // ==================== Validation ====================
    /// Missing or insufficient arguments, or an empty required field
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// Description of the failure
        reason: String,
    },

    /// Composite key cannot be decoded
    #[error("decode error: {reason}")]
    Decode {
        /// Description of the failure
        reason: String,
    },

    // ==================== System ====================
    /// Host store or cursor failure
    #[error("storage unavailable: {reason}")]
    StorageUnavailable {
        /// Description of the failure
        reason: String,
    },

    /// Serialization error
    #[error("serialization error: {reason}")]
    Serialization {
        /// Description of the failure
        reason: String,
    },
}

impl Error {
    /// Short machine-readable code for the error kind
    pub fn code(&self) -> &'static str {
        match self {
            Error::UnsupportedOperation { .. } => "UnsupportedOperation",
            Error::InvalidArgument { .. } => "InvalidArgument",
            Error::Decode { .. } => "DecodeError",
            Error::StorageUnavailable { .. } => "StorageUnavailable",
            Error::Serialization { .. } => "Serialization",
        }
    }
}
