//! Host collaborator traits
//!
//! The surrounding transaction host provides an already-consistent ordered
//! key-value store. These traits are the only surface this crate relies on,
//! so the executor works against any host (or the in-memory reference store
//! in `kvstate-storage`).

use serde::Serialize;

use crate::error::Result;
use crate::key::partial_key_range;
use crate::types::{CallerIdentity, CursorItem};

/// Forward-only, closeable iterator over ordered key/value pairs.
///
/// Lifecycle: open → `next` until a step reports `done` → `close` exactly
/// once.
pub trait StateCursor {
    /// Advance the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails mid-iteration.
    fn next(&mut self) -> Result<CursorItem>;

    /// Release the cursor.
    ///
    /// # Errors
    ///
    /// Returns an error if the host fails to release it.
    fn close(&mut self) -> Result<()>;
}

impl<C: StateCursor + ?Sized> StateCursor for Box<C> {
    fn next(&mut self) -> Result<CursorItem> {
        (**self).next()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}

/// Transactional store context supplied by the host.
///
/// Keys are compared bytewise (UTF-8 order); range and prefix cursors yield
/// pairs in ascending key order.
pub trait StateStore {
    /// Read the value stored at `key`, `None` if absent
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Write `value` at `key`
    fn put_state(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Remove `key`
    fn delete_state(&self, key: &str) -> Result<()>;

    /// Open a cursor over `[start_key, end_key)`.
    ///
    /// An empty `start_key` means the beginning of the keyspace, an empty
    /// `end_key` the end of it. Hosts may differ on whether an empty start
    /// includes composite keys; some begin such scans at `U+0001` and skip
    /// the composite namespace.
    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Box<dyn StateCursor>>;

    /// Open a cursor over every composite key under `(object_type, attributes)`.
    ///
    /// Hosts with a native partial-key query may override this; the default
    /// derives the key range from the composite key encoding.
    fn get_state_by_partial_composite_key(
        &self,
        object_type: &str,
        attributes: &[String],
    ) -> Result<Box<dyn StateCursor>> {
        let (start, end) = partial_key_range(object_type, attributes)?;
        self.get_state_by_range(&start, &end)
    }
}

/// Invocation context services beyond the store: caller identity and events.
pub trait HostContext {
    /// Identity of the transaction creator
    fn caller_identity(&self) -> Result<CallerIdentity>;

    /// Emit a named event with an opaque payload
    fn emit_event(&self, name: &str, payload: &[u8]) -> Result<()>;
}

/// Emit `payload` serialized as JSON under `name`.
pub fn emit_json_event<H, T>(host: &H, name: &str, payload: &T) -> Result<()>
where
    H: HostContext + ?Sized,
    T: Serialize + ?Sized,
{
    let bytes = serde_json::to_vec(payload)?;
    host.emit_event(name, &bytes)
}
