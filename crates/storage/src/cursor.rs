//! Snapshot cursor for the in-memory store
//!
//! A cursor clones the matching entries when it is opened, so later writes
//! to the store are not visible through it. Every open cursor is tracked in
//! a shared counter until it is closed, which lets tests assert that callers
//! release cursors on every path.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use kvstate_core::{CursorItem, Error, KeyValue, Result, StateCursor};

/// Forward cursor over a snapshot of key/value pairs
#[derive(Debug)]
pub struct SnapshotCursor {
    entries: VecDeque<KeyValue>,
    open_cursors: Arc<AtomicUsize>,
    closed: bool,
}

impl SnapshotCursor {
    /// Create a cursor over `entries`, registering it in `open_cursors`
    pub(crate) fn new(entries: Vec<KeyValue>, open_cursors: Arc<AtomicUsize>) -> Self {
        open_cursors.fetch_add(1, Ordering::SeqCst);
        Self {
            entries: entries.into(),
            open_cursors,
            closed: false,
        }
    }

    /// Number of entries not yet yielded
    pub fn remaining(&self) -> usize {
        self.entries.len()
    }
}

impl StateCursor for SnapshotCursor {
    fn next(&mut self) -> Result<CursorItem> {
        if self.closed {
            return Err(Error::storage("cursor already closed"));
        }
        Ok(match self.entries.pop_front() {
            Some(kv) => CursorItem::item(kv),
            None => CursorItem::done(),
        })
    }

    fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(Error::storage("cursor already closed"));
        }
        self.closed = true;
        self.entries.clear();
        self.open_cursors.fetch_sub(1, Ordering::SeqCst);
        Ok(())
    }
}

impl Drop for SnapshotCursor {
    fn drop(&mut self) {
        if !self.closed {
            tracing::warn!(
                target: "kvstate::storage",
                remaining = self.entries.len(),
                "Cursor dropped without being closed"
            );
        }
    }
}
