//! Configuration System
//!
//! Layered configuration: merge-policy defaults, the global config file, an
//! explicit `--config` file, then `VPPCLI_*` environment variables.

use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// fdio client settings shared by the generated client modules
    #[serde(default)]
    pub fdio: FdioConfig,
}

/// Settings for the fdio data-plane client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FdioConfig {
    /// gRPC endpoint of the data-plane agent (host:port)
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Per-request deadline in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

pub(crate) const DEFAULT_ENDPOINT: &str = "localhost:50052";
pub(crate) const DEFAULT_TIMEOUT_MS: u64 = 5000;

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

impl Default for FdioConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl FdioConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.endpoint.trim().is_empty() {
            return Err("fdio.endpoint cannot be empty".to_string());
        }
        if self.timeout_ms == 0 {
            return Err("fdio.timeout_ms must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl CliConfig {
    /// Validate the entire configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if let Err(e) = self.fdio.validate() {
            errors.push(e);
        }
        if let Err(e) = self.logging.validate() {
            errors.push(e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Render as TOML, e.g. to seed a config file.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
