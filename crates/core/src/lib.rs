//! Core types and traits for kvstate
//!
//! This crate defines the foundational pieces used throughout the system:
//! - Key codec: composite key encoding/decoding and argument-list helpers
//! - DecodedValue: opportunistic JSON decoding of stored payloads
//! - Limits: key and value size limits
//! - Error: error type hierarchy
//! - Traits: host collaborators (StateStore, StateCursor, HostContext)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod key;
pub mod limits;
pub mod traits;
pub mod types;
pub mod value;

pub use error::{Error, Result};
pub use key::{
    decode_composite_key, encode_composite_key, is_composite_key, partial_key_range, to_key,
    to_key_value, CompositeKey, COMPOSITE_KEY_NAMESPACE,
};
pub use limits::{LimitError, Limits};
pub use traits::{emit_json_event, HostContext, StateCursor, StateStore};
pub use types::{CallerIdentity, CursorItem, KeyValue, QueryResultEntry};
pub use value::DecodedValue;
