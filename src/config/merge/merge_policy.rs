//! Merge rules: defaults, override order, conflict handling.

use crate::config::{DEFAULT_ENDPOINT, DEFAULT_TIMEOUT_MS};
use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("fdio.endpoint", DEFAULT_ENDPOINT)?
        .set_default("fdio.timeout_ms", DEFAULT_TIMEOUT_MS as i64)
}
