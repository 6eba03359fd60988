//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. This mapping is
//! deterministic: the same command always produces the same output variant
//! (though the values may differ based on store state).

use kvstate_core::QueryResultEntry;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    /// No return value (put, delete)
    Unit,

    /// Raw stored bytes (get); empty when the key is absent
    Bytes(Vec<u8>),

    /// Materialized query result (range, list)
    Entries(Vec<QueryResultEntry>),
}

impl Output {
    /// Encode the output as the response payload sent back to the caller.
    ///
    /// `Unit` is empty, `Bytes` is passed through, `Entries` becomes a JSON
    /// array of `{"key": ..., "value": ...}` objects.
    pub fn into_payload(self) -> Result<Vec<u8>> {
        match self {
            Output::Unit => Ok(Vec::new()),
            Output::Bytes(bytes) => Ok(bytes),
            Output::Entries(entries) => Ok(serde_json::to_vec(&entries)?),
        }
    }
}

/// Host-facing response: a success payload or an error message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Response {
    /// The operation succeeded
    Success {
        /// Response payload bytes
        payload: Vec<u8>,
    },
    /// The operation failed
    Error {
        /// Error kind code
        code: String,
        /// Human-readable failure description
        message: String,
    },
}

impl Response {
    /// Whether the operation succeeded
    pub fn is_success(&self) -> bool {
        matches!(self, Response::Success { .. })
    }

    /// The success payload, if any
    pub fn payload(&self) -> Option<&[u8]> {
        match self {
            Response::Success { payload } => Some(payload),
            Response::Error { .. } => None,
        }
    }

    /// The error message, if any
    pub fn message(&self) -> Option<&str> {
        match self {
            Response::Success { .. } => None,
            Response::Error { message, .. } => Some(message),
        }
    }
}

impl From<Result<Vec<u8>>> for Response {
    fn from(result: Result<Vec<u8>>) -> Self {
        match result {
            Ok(payload) => Response::Success { payload },
            Err(e) => Response::from(e),
        }
    }
}

impl From<Error> for Response {
    fn from(err: Error) -> Self {
        Response::Error {
            code: err.code().to_string(),
            message: err.to_string(),
        }
    }
}
