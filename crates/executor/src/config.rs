//! Executor configuration via `kvstate.toml`
//!
//! The host usually constructs an executor with [`ExecutorConfig::default`].
//! Deployments that need different size limits ship a `kvstate.toml` next to
//! the service and load it with [`ExecutorConfig::from_file`].

use std::path::Path;

use kvstate_core::Limits;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Config file name
pub const CONFIG_FILE_NAME: &str = "kvstate.toml";

/// Executor configuration loaded from `kvstate.toml`.
///
/// # Example
///
/// ```toml
/// # Name reported in log lines
/// service = "storage"
///
/// [limits]
/// max_key_bytes = 65536
/// max_value_bytes = 16777216
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExecutorConfig {
    /// Name reported in log lines
    #[serde(default = "default_service")]
    pub service: String,
    /// Key and value size limits
    #[serde(default)]
    pub limits: Limits,
}

fn default_service() -> String {
    "kvstate".to_string()
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            limits: Limits::default(),
        }
    }
}

impl ExecutorConfig {
    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# kvstate executor configuration
#
# Name reported in log lines
service = "kvstate"

[limits]
# Maximum store key length in bytes, measured after composite encoding
max_key_bytes = 65536
# Maximum value length in bytes (16 MiB)
max_value_bytes = 16777216
"#
    }

    /// Parse and validate a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the text does not parse or the values are
    /// out of range.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: ExecutorConfig = toml::from_str(content).map_err(|e| Error::InvalidArgument {
            reason: format!("Failed to parse config: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::StorageUnavailable {
            reason: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content).map_err(|e| match e {
            Error::InvalidArgument { reason } => Error::InvalidArgument {
                reason: format!("{} (in '{}')", reason, path.display()),
            },
            other => other,
        })
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `Ok(())` whether the file was created or already existed.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| Error::StorageUnavailable {
                reason: format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ),
            })?;
        }
        Ok(())
    }

    /// Serialize this config to TOML and write it to the given path.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| Error::Serialization {
            reason: format!("Failed to serialize config: {}", e),
        })?;
        std::fs::write(path, content).map_err(|e| Error::StorageUnavailable {
            reason: format!("Failed to write config file '{}': {}", path.display(), e),
        })
    }

    fn validate(&self) -> Result<()> {
        if self.service.is_empty() {
            return Err(Error::InvalidArgument {
                reason: "service name must not be empty".to_string(),
            });
        }
        if self.limits.max_key_bytes == 0 || self.limits.max_value_bytes == 0 {
            return Err(Error::InvalidArgument {
                reason: "limits must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}
