//! MemoryStore: in-memory reference host with BTreeMap ordering
//!
//! This module implements the host collaborator traits using:
//! - `BTreeMap<String, Vec<u8>>` for ordered key storage
//! - `parking_lot::RwLock` for thread-safe access
//! - snapshot cursors (see [`crate::cursor`]) for range and prefix queries
//!
//! # Design Notes
//!
//! - **No versions, no tombstones**: deletes remove the entry
//! - **Snapshot cursors**: a cursor sees the store as it was when opened
//! - **Events are recorded**, not delivered; [`MemoryStore::events`] returns
//!   them in emission order

use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Included, Unbounded};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;

use kvstate_core::{
    CallerIdentity, HostContext, KeyValue, Result, StateCursor, StateStore,
};

use crate::cursor::SnapshotCursor;

/// MSP id reported by [`MemoryStore::new`]
pub const DEFAULT_MSP_ID: &str = "Org1MSP";

/// An event recorded by [`MemoryStore::emit_event`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedEvent {
    /// Event name
    pub name: String,
    /// Event payload
    pub payload: Vec<u8>,
}

/// In-memory ordered store implementing [`StateStore`] and [`HostContext`]
///
/// Thread-safe through `parking_lot::RwLock`; clones share the same data.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    /// The main data store: ordered map from key to raw value
    data: Arc<RwLock<BTreeMap<String, Vec<u8>>>>,
    /// Events emitted through `HostContext`
    events: Arc<RwLock<Vec<RecordedEvent>>>,
    /// Cursors opened and not yet closed
    open_cursors: Arc<AtomicUsize>,
    /// Identity reported to callers
    identity: CallerIdentity,
}

impl MemoryStore {
    /// Create an empty store reporting [`DEFAULT_MSP_ID`] as caller
    pub fn new() -> Self {
        Self::with_msp_id(DEFAULT_MSP_ID)
    }

    /// Create an empty store reporting `msp_id` as caller
    pub fn with_msp_id(msp_id: impl Into<String>) -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
            events: Arc::new(RwLock::new(Vec::new())),
            open_cursors: Arc::new(AtomicUsize::new(0)),
            identity: CallerIdentity::from_msp_id(msp_id),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    /// Whether the store holds no keys
    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    /// Number of cursors opened and not yet closed
    pub fn open_cursors(&self) -> usize {
        self.open_cursors.load(Ordering::SeqCst)
    }

    /// Events emitted so far, oldest first
    pub fn events(&self) -> Vec<RecordedEvent> {
        self.events.read().clone()
    }

    /// All keys in store order
    pub fn keys(&self) -> Vec<String> {
        self.data.read().keys().cloned().collect()
    }

    fn snapshot_range(&self, start_key: &str, end_key: &str) -> Vec<KeyValue> {
        let data = self.data.read();

        let lower = if start_key.is_empty() {
            Unbounded
        } else {
            Included(start_key)
        };
        let upper = if end_key.is_empty() {
            Unbounded
        } else {
            // BTreeMap::range panics on inverted bounds
            if !start_key.is_empty() && start_key >= end_key {
                return Vec::new();
            }
            Excluded(end_key)
        };

        data.range::<str, _>((lower, upper))
            .map(|(k, v)| KeyValue::new(k.clone(), v.clone()))
            .collect()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl StateStore for MemoryStore {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.data.read().get(key).cloned())
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<()> {
        self.data.write().insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&self, key: &str) -> Result<()> {
        self.data.write().remove(key);
        Ok(())
    }

    fn get_state_by_range(&self, start_key: &str, end_key: &str) -> Result<Box<dyn StateCursor>> {
        let entries = self.snapshot_range(start_key, end_key);
        tracing::debug!(
            target: "kvstate::storage",
            start = ?start_key,
            end = ?end_key,
            entries = entries.len(),
            "Opened range cursor"
        );
        Ok(Box::new(SnapshotCursor::new(
            entries,
            Arc::clone(&self.open_cursors),
        )))
    }
}

impl HostContext for MemoryStore {
    fn caller_identity(&self) -> Result<CallerIdentity> {
        Ok(self.identity.clone())
    }

    fn emit_event(&self, name: &str, payload: &[u8]) -> Result<()> {
        self.events.write().push(RecordedEvent {
            name: name.to_string(),
            payload: payload.to_vec(),
        });
        Ok(())
    }
}
