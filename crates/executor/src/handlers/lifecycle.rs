//! Init handler.

use crate::{Output, Result};

/// Handle the host's init call.
///
/// The host calls `init` once when the service is instantiated; there is no
/// state to prepare, so the call only acknowledges.
pub fn init(service: &str, args: &[String]) -> Result<Output> {
    tracing::info!(target: "kvstate::executor", service = %service, args = ?args, "Init");
    Ok(Output::Unit)
}
