//! Query materialization.
//!
//! [`drain`] turns a host cursor into a finite, ordered list of
//! [`QueryResultEntry`] values. The cursor is held by a [`CursorGuard`] so it
//! is closed exactly once whether draining completes, the host fails
//! mid-iteration, or the caller unwinds.

use kvstate_core::{CursorItem, DecodedValue, QueryResultEntry, Result, StateCursor};

/// Scoped owner of an open cursor.
///
/// `close` releases the cursor and reports the host's answer; dropping an
/// unreleased guard closes the cursor and logs any failure.
pub struct CursorGuard<C: StateCursor> {
    cursor: Option<C>,
}

impl<C: StateCursor> CursorGuard<C> {
    /// Take ownership of an open cursor
    pub fn new(cursor: C) -> Self {
        Self {
            cursor: Some(cursor),
        }
    }

    /// Advance the cursor; a released guard reports completion
    pub fn next(&mut self) -> Result<CursorItem> {
        match self.cursor.as_mut() {
            Some(cursor) => cursor.next(),
            None => Ok(CursorItem::done()),
        }
    }

    /// Release the cursor now
    pub fn close(mut self) -> Result<()> {
        match self.cursor.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl<C: StateCursor> Drop for CursorGuard<C> {
    fn drop(&mut self) {
        if let Some(mut cursor) = self.cursor.take() {
            if let Err(e) = cursor.close() {
                tracing::warn!(target: "kvstate::executor", error = %e, "Failed to close cursor");
            }
        }
    }
}

/// Drain `cursor` into an ordered result list.
///
/// - pairs are kept in cursor order
/// - values are decoded as JSON when they parse, as raw text otherwise
/// - pairs with an empty value are skipped
/// - the step that reports `done` ends the loop; a pair carried by that step
///   is still included
///
/// # Errors
///
/// Host failures from `next` or `close` are returned as storage errors. The
/// cursor is closed on every path, exactly once.
pub fn drain<C: StateCursor>(cursor: C) -> Result<Vec<QueryResultEntry>> {
    let mut guard = CursorGuard::new(cursor);
    let mut entries = Vec::new();

    loop {
        let step = guard.next()?;

        if let Some(kv) = step.value {
            // Empty payloads are skipped.
            if !kv.value.is_empty() {
                entries.push(QueryResultEntry {
                    value: DecodedValue::decode(&kv.value),
                    key: kv.key,
                });
            }
        }

        if step.done {
            guard.close()?;
            return Ok(entries);
        }
    }
}
