//! kvstate - composite-key state access over a host key-value store
//!
//! kvstate routes named operations (`put`, `get`, `delete`, `range`, `list`)
//! to a caller-supplied store. Multi-part keys are encoded with an escaped,
//! terminated composite key scheme so partial-key queries map onto a single
//! lexicographic range.
//!
//! # Quick Start
//!
//! ```
//! use kvstate::Executor;
//! use kvstate_storage::MemoryStore;
//!
//! let executor = Executor::new(MemoryStore::new());
//!
//! executor.invoke("put", vec!["asset".into(), "org1".into(), "42".into(), "{\"x\":1}".into()]);
//! let response = executor.invoke("list", vec!["asset".into(), "org1".into()]);
//! assert!(response.is_success());
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`]. The key codec, value types and
//! host traits live in `kvstate-core`; `kvstate-storage` provides an
//! in-memory reference host.

// Re-export the public API from kvstate-executor
pub use kvstate_executor::*;
