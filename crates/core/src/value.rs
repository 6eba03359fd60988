//! Decoded values for query results
//!
//! Stored values carry no schema. On read they are decoded opportunistically:
//! if the bytes parse as JSON the parsed structure is returned, otherwise the
//! raw text is kept.

use serde::{Deserialize, Deserializer, Serialize};

/// A value decoded from a stored payload.
///
/// Serialized untagged, so a JSON value appears as itself and raw text as a
/// JSON string. The two share a wire form: deserializing always yields
/// `Json`, with raw text coming back as `Json(Value::String(..))`. Compare
/// through [`DecodedValue::into_json`] when both sides may have crossed the
/// wire.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DecodedValue {
    /// The payload parsed as JSON
    Json(serde_json::Value),
    /// The payload did not parse as JSON; its (lossy) UTF-8 text
    Raw(String),
}

impl DecodedValue {
    /// Decode a stored payload: JSON if it parses, raw text otherwise.
    ///
    /// Invalid UTF-8 sequences are replaced with `U+FFFD` before parsing.
    pub fn decode(bytes: &[u8]) -> Self {
        let text = String::from_utf8_lossy(bytes);
        match serde_json::from_str::<serde_json::Value>(&text) {
            Ok(json) => DecodedValue::Json(json),
            Err(_) => DecodedValue::Raw(text.into_owned()),
        }
    }

    /// Whether the payload was parsed as JSON
    pub fn is_json(&self) -> bool {
        matches!(self, DecodedValue::Json(_))
    }

    /// Convert into a plain JSON value (raw text becomes a JSON string)
    pub fn into_json(self) -> serde_json::Value {
        match self {
            DecodedValue::Json(v) => v,
            DecodedValue::Raw(s) => serde_json::Value::String(s),
        }
    }
}

impl<'de> Deserialize<'de> for DecodedValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        serde_json::Value::deserialize(deserializer).map(DecodedValue::Json)
    }
}
