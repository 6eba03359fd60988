//! # kvstate Executor
//!
//! Operation routing and query materialization over a host key-value store.
//!
//! It provides:
//! - [`Executor`] - routes named operations to handlers
//! - [`Command`]/[`Output`] - the closed operation set and its results
//! - [`Response`] - the host-facing success payload or error message
//! - [`drain`] - cursor materialization into decoded result entries
//!
//! ## Quick Start
//!
//! ```text
//! use kvstate_executor::Executor;
//!
//! let executor = Executor::new(host_store);
//!
//! executor.invoke("put", vec!["asset".into(), "org1".into(), "42".into(), "{\"x\":1}".into()]);
//! let response = executor.invoke("list", vec!["asset".into(), "org1".into()]);
//! // payload: [{"key":"\u0000asset\u0000org1\u000042\u0000","value":{"x":1}}]
//! ```
//!
//! ## Operations
//!
//! | Operation | Args | Payload |
//! |-----------|------|---------|
//! | `put` | key[, attrs...], value | empty |
//! | `get` | key[, attrs...] | raw value bytes |
//! | `delete` | key[, attrs...] | empty |
//! | `range` | [startKey[, endKey]] | JSON array of `{key, value}` |
//! | `list` | objectType[, attrs...] | JSON array of `{key, value}` |
//!
//! The host's `init` call goes to [`Executor::init`], outside the router.

#![warn(missing_docs)]

mod command;
pub mod config;
mod convert;
mod error;
mod executor;
mod handlers;
pub mod materialize;
mod output;


pub use command::Command;
pub use config::ExecutorConfig;
pub use error::Error;
pub use executor::Executor;
pub use materialize::{drain, CursorGuard};
pub use output::{Output, Response};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
