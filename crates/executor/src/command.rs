//! Command enum defining all kvstate operations.
//!
//! Commands are the closed instruction set of the router. A request arrives
//! as an operation name plus an ordered list of string arguments; the name
//! selects the variant and the arguments travel with it unchanged. Argument
//! count validation belongs to the handler of each operation.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A self-contained, serializable operation.
///
/// | Operation | Args | Returns |
/// |-----------|------|---------|
/// | `put` | key[, attrs...], value | `Output::Unit` |
/// | `get` | key[, attrs...] | `Output::Bytes` |
/// | `delete` | key[, attrs...] | `Output::Unit` |
/// | `range` | [startKey[, endKey]] | `Output::Entries` |
/// | `list` | objectType[, attrs...] | `Output::Entries` |
///
/// # Example
///
/// ```
/// use kvstate_executor::Command;
///
/// let cmd = Command::parse("get", vec!["asset".into(), "42".into()]).unwrap();
/// assert_eq!(cmd.name(), "get");
/// assert!(Command::parse("transfer", vec![]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    /// Write a value under a simple or composite key.
    /// Returns: `Output::Unit`
    Put {
        /// Operation arguments
        args: Vec<String>,
    },

    /// Read the raw value under a simple or composite key.
    /// Returns: `Output::Bytes` (empty if the key is absent)
    Get {
        /// Operation arguments
        args: Vec<String>,
    },

    /// Delete a simple or composite key.
    /// Returns: `Output::Unit`
    Delete {
        /// Operation arguments
        args: Vec<String>,
    },

    /// Scan `[startKey, endKey)`; missing bounds mean the whole keyspace.
    /// Returns: `Output::Entries`
    Range {
        /// Optional start and end keys
        #[serde(default)]
        args: Vec<String>,
    },

    /// Scan every composite key under an object type and attribute prefix.
    /// Returns: `Output::Entries`
    List {
        /// Operation arguments
        args: Vec<String>,
    },
}

impl Command {
    /// Every operation name the router accepts
    pub const OPERATIONS: [&'static str; 5] = ["put", "get", "delete", "range", "list"];

    /// Build a command from an operation name and its arguments.
    ///
    /// # Errors
    ///
    /// Returns `UnsupportedOperation` if `name` is not a known operation.
    /// `init` is not routed; the host calls [`Executor::init`] for it.
    ///
    /// [`Executor::init`]: crate::Executor::init
    pub fn parse(name: &str, args: Vec<String>) -> Result<Self> {
        match name {
            "put" => Ok(Command::Put { args }),
            "get" => Ok(Command::Get { args }),
            "delete" => Ok(Command::Delete { args }),
            "range" => Ok(Command::Range { args }),
            "list" => Ok(Command::List { args }),
            other => Err(Error::UnsupportedOperation {
                name: other.to_string(),
            }),
        }
    }

    /// The operation name of this command
    pub fn name(&self) -> &'static str {
        match self {
            Command::Put { .. } => "put",
            Command::Get { .. } => "get",
            Command::Delete { .. } => "delete",
            Command::Range { .. } => "range",
            Command::List { .. } => "list",
        }
    }

    /// The arguments carried by this command
    pub fn args(&self) -> &[String] {
        match self {
            Command::Put { args }
            | Command::Get { args }
            | Command::Delete { args }
            | Command::Range { args }
            | Command::List { args } => args,
        }
    }

    /// Whether this command may modify the store
    pub fn is_write(&self) -> bool {
        matches!(self, Command::Put { .. } | Command::Delete { .. })
    }
}
