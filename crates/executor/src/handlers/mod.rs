//! Command handlers organized by operation category.
//!
//! | Module | Commands | Store calls |
//! |--------|----------|-------------|
//! | `lifecycle` | host init call (not routed) | none |
//! | `state` | put, get, delete | `put_state`, `get_state`, `delete_state` |
//! | `query` | range, list | `get_state_by_range`, `get_state_by_partial_composite_key` |

pub mod lifecycle;
pub mod query;
pub mod state;
