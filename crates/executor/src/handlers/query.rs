//! Query handlers: range and list.
//!
//! Both open a host cursor and hand it to [`drain`], which owns closing it.

use kvstate_core::StateStore;

use crate::convert::convert_result;
use crate::materialize::drain;
use crate::{Error, Output, Result};

/// Handle Range command.
///
/// `args[0]` is the inclusive start key and `args[1]` the exclusive end key;
/// a missing bound is the empty string, which means the start or end of the
/// keyspace. Extra arguments are ignored.
pub fn range<S: StateStore + ?Sized>(store: &S, args: &[String]) -> Result<Output> {
    let start_key = args.first().map(String::as_str).unwrap_or("");
    let end_key = args.get(1).map(String::as_str).unwrap_or("");

    let cursor = convert_result(store.get_state_by_range(start_key, end_key))?;
    let entries = convert_result(drain(cursor))?;
    Ok(Output::Entries(entries))
}

/// Handle List command.
///
/// `args[0]` is the object type, the rest a (possibly partial) attribute
/// prefix.
pub fn list<S: StateStore + ?Sized>(store: &S, args: &[String]) -> Result<Output> {
    let (object_type, attributes) = args.split_first().ok_or_else(|| Error::InvalidArgument {
        reason: "incorrect number of arguments, objectType is required".to_string(),
    })?;

    tracing::debug!(
        target: "kvstate::executor",
        object_type = %object_type,
        attributes = ?attributes,
        "list"
    );

    let cursor = convert_result(store.get_state_by_partial_composite_key(object_type, attributes))?;
    let entries = convert_result(drain(cursor))?;
    Ok(Output::Entries(entries))
}
