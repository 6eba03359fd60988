//! Error conversion from core error types.
//!
//! This module provides conversions from `kvstate_core` errors to the
//! executor's [`Error`] type.

use crate::Error;

/// Convert a core error to an executor Error.
impl From<kvstate_core::Error> for Error {
    fn from(err: kvstate_core::Error) -> Self {
        match err {
            kvstate_core::Error::InvalidArgument(reason) => Error::InvalidArgument { reason },
            kvstate_core::Error::Decode(reason) => Error::Decode { reason },
            kvstate_core::Error::Storage(reason) => Error::StorageUnavailable { reason },
            kvstate_core::Error::Serialization(reason) => Error::Serialization { reason },
        }
    }
}

impl From<kvstate_core::LimitError> for Error {
    fn from(err: kvstate_core::LimitError) -> Self {
        Error::InvalidArgument {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization {
            reason: err.to_string(),
        }
    }
}

/// Convert a core Result into an executor Result.
pub fn convert_result<T>(r: kvstate_core::Result<T>) -> crate::Result<T> {
    r.map_err(Error::from)
}
