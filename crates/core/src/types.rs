//! Plain data types shared between the host traits and the executor

use serde::{Deserialize, Serialize};

use crate::value::DecodedValue;

/// A raw key/value pair yielded by a host cursor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyValue {
    /// Store key (simple or composite)
    pub key: String,
    /// Raw stored payload
    pub value: Vec<u8>,
}

impl KeyValue {
    /// Create a key/value pair
    pub fn new(key: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// One step of a host cursor.
///
/// A step may carry an item and signal completion at the same time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CursorItem {
    /// The yielded pair, if any
    pub value: Option<KeyValue>,
    /// Whether the cursor is exhausted
    pub done: bool,
}

impl CursorItem {
    /// A step yielding `kv` with more to come
    pub fn item(kv: KeyValue) -> Self {
        Self {
            value: Some(kv),
            done: false,
        }
    }

    /// A final step yielding `kv`
    pub fn last(kv: KeyValue) -> Self {
        Self {
            value: Some(kv),
            done: true,
        }
    }

    /// An empty final step
    pub fn done() -> Self {
        Self {
            value: None,
            done: true,
        }
    }
}

/// A materialized query result entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryResultEntry {
    /// Store key
    pub key: String,
    /// Decoded value
    pub value: DecodedValue,
}

/// Identity of the transaction creator, as reported by the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallerIdentity {
    /// Membership service provider id (e.g. `Org1MSP`)
    pub msp_id: String,
    /// Organisation name derived from the MSP id (e.g. `Org1`)
    pub org: String,
}

impl CallerIdentity {
    /// Build an identity from an MSP id; the org is everything before the
    /// first `MSP`.
    pub fn from_msp_id(msp_id: impl Into<String>) -> Self {
        let msp_id = msp_id.into();
        let org = msp_id
            .split("MSP")
            .next()
            .unwrap_or_default()
            .to_string();
        Self { msp_id, org }
    }
}
