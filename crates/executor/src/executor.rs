//! The Executor - single entry point for host invocations.
//!
//! The Executor is a stateless dispatcher that routes commands to the
//! appropriate handler and converts results to outputs.

use kvstate_core::{HostContext, StateStore};

use crate::config::ExecutorConfig;
use crate::handlers::{lifecycle, query, state};
use crate::output::Response;
use crate::{Command, Output, Result};

/// The command executor - single entry point for host invocations.
///
/// The Executor is **stateless**: it holds the caller-supplied store handle
/// and its configuration but keeps no state of its own between invocations.
///
/// # Example
///
/// ```
/// use kvstate_executor::{Command, Executor, Output};
/// use kvstate_storage::MemoryStore;
///
/// let executor = Executor::new(MemoryStore::new());
///
/// executor
///     .execute(Command::Put { args: vec!["asset".into(), "42".into(), "blue".into()] })
///     .unwrap();
///
/// let output = executor
///     .execute(Command::Get { args: vec!["asset".into(), "42".into()] })
///     .unwrap();
/// assert_eq!(output, Output::Bytes(b"blue".to_vec()));
///
/// // Host-style invocation by name
/// let response = executor.invoke("list", vec!["asset".into()]);
/// assert!(response.is_success());
/// ```
#[derive(Debug)]
pub struct Executor<S> {
    store: S,
    config: ExecutorConfig,
}

impl<S: StateStore> Executor<S> {
    /// Create a new executor over a host store with the default config.
    pub fn new(store: S) -> Self {
        Self::with_config(store, ExecutorConfig::default())
    }

    /// Create a new executor over a host store with an explicit config.
    pub fn with_config(store: S, config: ExecutorConfig) -> Self {
        Self { store, config }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error.
    pub fn execute(&self, cmd: Command) -> Result<Output> {
        let limits = &self.config.limits;
        match cmd {
            Command::Put { args } => state::put(&self.store, limits, &args),
            Command::Get { args } => state::get(&self.store, limits, &args),
            Command::Delete { args } => state::delete(&self.store, limits, &args),
            Command::Range { args } => query::range(&self.store, &args),
            Command::List { args } => query::list(&self.store, &args),
        }
    }

    /// Handle the host's initialisation call.
    ///
    /// Separate from [`Executor::invoke`]: `init` is not a routed operation.
    /// Returns an empty success payload.
    pub fn init(&self, args: &[String]) -> Response {
        let result = lifecycle::init(&self.config.service, args).and_then(Output::into_payload);
        Response::from(result)
    }

    /// Execute multiple commands sequentially.
    ///
    /// Each command is executed independently; a failure does not stop the
    /// batch. Results are returned in the same order as the input commands.
    pub fn execute_many(&self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// Handle a host invocation: route `name`, execute, encode the payload.
    ///
    /// Never fails; errors are returned as [`Response::Error`] carrying the
    /// error's message.
    pub fn invoke(&self, name: &str, args: Vec<String>) -> Response {
        tracing::info!(
            target: "kvstate::executor",
            service = %self.config.service,
            operation = name,
            args = ?args,
            "Invoke"
        );
        self.respond(name, args)
    }

    /// Handle a host invocation, logging the calling organisation.
    ///
    /// Fails with an error response if the host cannot report the caller.
    pub fn invoke_with_context<H>(&self, ctx: &H, name: &str, args: Vec<String>) -> Response
    where
        H: HostContext + ?Sized,
    {
        let caller = match ctx.caller_identity() {
            Ok(caller) => caller,
            Err(e) => {
                tracing::error!(
                    target: "kvstate::executor",
                    operation = name,
                    error = %e,
                    "Failed to resolve caller identity"
                );
                return Response::from(crate::Error::from(e));
            }
        };
        tracing::info!(
            target: "kvstate::executor",
            service = %self.config.service,
            org = %caller.org,
            operation = name,
            args = ?args,
            "Invoke"
        );
        self.respond(name, args)
    }

    fn respond(&self, name: &str, args: Vec<String>) -> Response {
        let result = Command::parse(name, args)
            .and_then(|cmd| self.execute(cmd))
            .and_then(Output::into_payload);
        if let Err(e) = &result {
            tracing::error!(
                target: "kvstate::executor",
                operation = name,
                code = e.code(),
                error = %e,
                "Invoke failed"
            );
        }
        Response::from(result)
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the executor configuration.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }
}
