//! Point operation handlers: put, get, delete.
//!
//! Each handler derives the store key from its argument list with the
//! composite key codec, checks it against the configured limits and makes a
//! single store call.

use kvstate_core::{to_key, to_key_value, Limits, StateStore};

use crate::convert::convert_result;
use crate::{Output, Result};

/// Handle Put command.
pub fn put<S: StateStore + ?Sized>(store: &S, limits: &Limits, args: &[String]) -> Result<Output> {
    let (key, value) = convert_result(to_key_value(args))?;
    limits.validate_key_length(&key)?;
    limits.validate_value_length(value.as_bytes())?;
    convert_result(store.put_state(&key, value.as_bytes()))?;
    Ok(Output::Unit)
}

/// Handle Get command.
///
/// A missing key yields an empty payload, as the host does.
pub fn get<S: StateStore + ?Sized>(store: &S, limits: &Limits, args: &[String]) -> Result<Output> {
    let key = convert_result(to_key(args))?;
    limits.validate_key_length(&key)?;
    let value = convert_result(store.get_state(&key))?;
    Ok(Output::Bytes(value.unwrap_or_default()))
}

/// Handle Delete command.
pub fn delete<S: StateStore + ?Sized>(
    store: &S,
    limits: &Limits,
    args: &[String],
) -> Result<Output> {
    let key = convert_result(to_key(args))?;
    limits.validate_key_length(&key)?;
    convert_result(store.delete_state(&key))?;
    Ok(Output::Unit)
}
