//! Size limits for keys and values
//!
//! These limits are enforced by the operation handlers on the derived store
//! key and on written values. Violations surface as `InvalidArgument`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::Error;

/// Size limits for keys and values
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Limits {
    /// Maximum store key length in bytes, after composite encoding (default: 64KiB)
    pub max_key_bytes: usize,

    /// Maximum value length in bytes (default: 16MiB)
    pub max_value_bytes: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Limits {
            max_key_bytes: 64 * 1024,
            max_value_bytes: 16 * 1024 * 1024, // 16MiB
        }
    }
}

impl Limits {
    /// Create limits with small values for testing
    pub fn with_small_limits() -> Self {
        Limits {
            max_key_bytes: 100,
            max_value_bytes: 1000,
        }
    }

    /// Validate a store key length
    pub fn validate_key_length(&self, key: &str) -> Result<(), LimitError> {
        let len = key.len();
        if len > self.max_key_bytes {
            return Err(LimitError::KeyTooLong {
                actual: len,
                max: self.max_key_bytes,
            });
        }
        Ok(())
    }

    /// Validate a value length
    pub fn validate_value_length(&self, value: &[u8]) -> Result<(), LimitError> {
        let len = value.len();
        if len > self.max_value_bytes {
            return Err(LimitError::ValueTooLarge {
                actual: len,
                max: self.max_value_bytes,
            });
        }
        Ok(())
    }
}

/// Limit violation errors
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LimitError {
    /// Key exceeds maximum length
    #[error("key too long: {actual} bytes exceeds maximum {max}")]
    KeyTooLong {
        /// Actual key length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },

    /// Value exceeds maximum size
    #[error("value too large: {actual} bytes exceeds maximum {max}")]
    ValueTooLarge {
        /// Actual value length in bytes
        actual: usize,
        /// Maximum allowed length
        max: usize,
    },
}

impl LimitError {
    /// Get the reason code for the error response
    pub fn reason_code(&self) -> &'static str {
        match self {
            LimitError::KeyTooLong { .. } => "key_too_long",
            LimitError::ValueTooLarge { .. } => "value_too_large",
        }
    }
}

impl From<LimitError> for Error {
    fn from(e: LimitError) -> Self {
        Error::InvalidArgument(e.to_string())
    }
}
