//! Reference host storage for kvstate
//!
//! This crate implements the host collaborator traits in memory:
//! - MemoryStore: BTreeMap-based ordered store with RwLock
//! - SnapshotCursor: range cursor over a snapshot taken at open time
//! - Caller identity and recorded events for `HostContext`
//! - Scripted cursors for testing cursor consumers

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cursor;
pub mod memory;
pub mod testing;

pub use cursor::SnapshotCursor;
pub use memory::{MemoryStore, RecordedEvent, DEFAULT_MSP_ID};
