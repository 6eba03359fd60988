//! Composite key codec
//!
//! Store keys come in two forms:
//!
//! - **Simple keys** are the caller-supplied string, stored unchanged.
//! - **Composite keys** are built from an object type plus an ordered list of
//!   attribute strings.
//!
//! ## Encoding
//!
//! A composite key starts with the namespace char `U+0000`, followed by the
//! object type and then every attribute, each written as an escaped,
//! terminated component:
//!
//! - `U+0000` → `U+0001 U+0001`
//! - `U+0001` → `U+0001 U+0002`
//! - every other char unchanged
//! - terminated with `U+0000`
//!
//! ```text
//! ┌────────┬──────────────────┬──────────────┬─────┬──────────────┐
//! │ U+0000 │ object_type  \0  │ attr[0]  \0  │ ... │ attr[n]  \0  │
//! └────────┴──────────────────┴──────────────┴─────┴──────────────┘
//! ```
//!
//! An unescaped `U+0000` only ever appears as a terminator, so decoding is
//! unambiguous and no two distinct `(object_type, attributes)` pairs share an
//! encoding. Because every component is terminated, the encoding of a partial
//! attribute list is a prefix of the encoding of any list that extends it,
//! and because the terminator is the lowest char, encoded keys sort in the
//! same order as their component sequences.

use std::fmt;
use std::str::Chars;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// First char of every composite key
pub const COMPOSITE_KEY_NAMESPACE: char = '\u{0}';

/// Component terminator (lowest char value)
const TERMINATOR: char = '\u{0}';

/// Escape char for components
const ESCAPE: char = '\u{1}';

/// Char that follows `ESCAPE` to stand for an escaped terminator
const ESCAPED_TERMINATOR: char = '\u{1}';

/// Char that follows `ESCAPE` to stand for an escaped escape
const ESCAPED_ESCAPE: char = '\u{2}';

/// Char that replaces the final terminator to form an exclusive upper bound
const UPPER_BOUND: char = '\u{1}';

/// A decoded composite key: an object type plus ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CompositeKey {
    object_type: String,
    attributes: Vec<String>,
}

impl CompositeKey {
    /// Create a composite key from its parts.
    ///
    /// Fails with `InvalidArgument` if `object_type` is empty.
    pub fn new(object_type: impl Into<String>, attributes: Vec<String>) -> Result<Self> {
        let object_type = object_type.into();
        if object_type.is_empty() {
            return Err(Error::invalid_argument("objectType is required"));
        }
        Ok(Self {
            object_type,
            attributes,
        })
    }

    /// The object type tag
    pub fn object_type(&self) -> &str {
        &self.object_type
    }

    /// The ordered attributes
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    /// Split into `(object_type, attributes)`
    pub fn into_parts(self) -> (String, Vec<String>) {
        (self.object_type, self.attributes)
    }

    /// Encode into the store key form
    pub fn encode(&self) -> String {
        encode_parts(&self.object_type, &self.attributes)
    }

    /// Decode a store key produced by [`CompositeKey::encode`]
    pub fn decode(key: &str) -> Result<Self> {
        decode_composite_key(key)
    }
}

impl fmt::Display for CompositeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.object_type)?;
        for attribute in &self.attributes {
            write!(f, "/{}", attribute)?;
        }
        Ok(())
    }
}

fn encode_parts<S: AsRef<str>>(object_type: &str, attributes: &[S]) -> String {
    let capacity = 2
        + object_type.len()
        + attributes
            .iter()
            .map(|a| a.as_ref().len() + 1)
            .sum::<usize>();
    let mut buf = String::with_capacity(capacity);
    buf.push(COMPOSITE_KEY_NAMESPACE);
    push_component(object_type, &mut buf);
    for attribute in attributes {
        push_component(attribute.as_ref(), &mut buf);
    }
    buf
}

/// Append one escaped, terminated component to `buf`.
fn push_component(component: &str, buf: &mut String) {
    for c in component.chars() {
        match c {
            TERMINATOR => {
                buf.push(ESCAPE);
                buf.push(ESCAPED_TERMINATOR);
            }
            ESCAPE => {
                buf.push(ESCAPE);
                buf.push(ESCAPED_ESCAPE);
            }
            _ => buf.push(c),
        }
    }
    buf.push(TERMINATOR);
}

/// Read one component, advancing `chars` past its terminator.
fn read_component(chars: &mut Chars<'_>) -> Result<String> {
    let mut component = String::new();
    loop {
        match chars.next() {
            None => {
                return Err(Error::decode(
                    "unterminated component (missing U+0000 terminator)",
                ))
            }
            Some(TERMINATOR) => return Ok(component),
            Some(ESCAPE) => match chars.next() {
                Some(ESCAPED_TERMINATOR) => component.push(TERMINATOR),
                Some(ESCAPED_ESCAPE) => component.push(ESCAPE),
                Some(other) => {
                    return Err(Error::decode(format!(
                        "invalid escape sequence: U+0001 U+{:04X}",
                        other as u32
                    )))
                }
                None => return Err(Error::decode("truncated escape sequence")),
            },
            Some(c) => component.push(c),
        }
    }
}

/// Encode `(object_type, attributes)` into a composite store key.
///
/// # Errors
///
/// Returns `InvalidArgument` if `object_type` is empty. Attributes may hold
/// any string, including empty strings and the reserved chars, which are
/// escaped.
///
/// # Examples
///
/// ```
/// use kvstate_core::key::encode_composite_key;
///
/// let full = encode_composite_key("asset", &["org1", "a-42"]).unwrap();
/// let partial = encode_composite_key("asset", &["org1"]).unwrap();
/// assert!(full.starts_with(&partial));
/// assert!(encode_composite_key("", &["org1"]).is_err());
/// ```
pub fn encode_composite_key<S: AsRef<str>>(object_type: &str, attributes: &[S]) -> Result<String> {
    if object_type.is_empty() {
        return Err(Error::invalid_argument("objectType is required"));
    }
    Ok(encode_parts(object_type, attributes))
}

/// Decode a composite store key back into its object type and attributes.
///
/// # Errors
///
/// Returns `Decode` if the key lacks the composite namespace char, contains a
/// truncated or invalid escape, has an unterminated component, or carries an
/// empty object type.
pub fn decode_composite_key(key: &str) -> Result<CompositeKey> {
    let rest = key
        .strip_prefix(COMPOSITE_KEY_NAMESPACE)
        .ok_or_else(|| Error::decode("not a composite key (missing U+0000 namespace)"))?;

    let mut chars = rest.chars();
    let object_type = read_component(&mut chars)?;
    if object_type.is_empty() {
        return Err(Error::decode("composite key has an empty object type"));
    }

    let mut attributes = Vec::new();
    while !chars.as_str().is_empty() {
        attributes.push(read_component(&mut chars)?);
    }

    Ok(CompositeKey {
        object_type,
        attributes,
    })
}

/// Whether `key` lives in the composite key namespace
pub fn is_composite_key(key: &str) -> bool {
    key.starts_with(COMPOSITE_KEY_NAMESPACE)
}

/// Half-open key range `[start, end)` covering every composite key whose
/// object type is `object_type` and whose attributes start with `attributes`.
///
/// `start` is the encoded partial key itself; `end` replaces its final
/// terminator with the next char, so only keys extending the prefix fall in
/// the range.
pub fn partial_key_range<S: AsRef<str>>(
    object_type: &str,
    attributes: &[S],
) -> Result<(String, String)> {
    let start = encode_composite_key(object_type, attributes)?;
    let mut end = start.clone();
    end.pop();
    end.push(UPPER_BOUND);
    Ok((start, end))
}

/// Derive a store key from an argument list.
///
/// - no arguments: `InvalidArgument("key is required")`
/// - one argument: the argument unchanged (simple key)
/// - more: `args[0]` is the object type, the rest are attributes
pub fn to_key<S: AsRef<str>>(args: &[S]) -> Result<String> {
    match args {
        [] => Err(Error::invalid_argument(
            "incorrect number of arguments, key is required",
        )),
        [key] => Ok(key.as_ref().to_string()),
        [object_type, attributes @ ..] => encode_composite_key(object_type.as_ref(), attributes),
    }
}

/// Derive a store key and a value from an argument list.
///
/// - fewer than two arguments: `InvalidArgument("key and value are required")`
/// - two arguments: `(args[0], args[1])`
/// - more: the last argument is the value, `args[0]` the object type and
///   everything in between the attributes
pub fn to_key_value<S: AsRef<str>>(args: &[S]) -> Result<(String, String)> {
    match args {
        [] | [_] => Err(Error::invalid_argument(
            "incorrect number of arguments, key and value are required",
        )),
        [key, value] => Ok((key.as_ref().to_string(), value.as_ref().to_string())),
        [object_type, attributes @ .., value] => Ok((
            encode_composite_key(object_type.as_ref(), attributes)?,
            value.as_ref().to_string(),
        )),
    }
}
