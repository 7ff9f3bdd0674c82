//! Config loader facade: assembles sources and validates the result.

use crate::config::merge::merge_policy;
use crate::config::sources::{environment, explicit_file, global_file};
use crate::config::CliConfig;
use crate::error::CliError;
use std::path::Path;
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources.
    ///
    /// Precedence (highest last): defaults, global config file, `explicit` file,
    /// `VPPCLI_*` environment.
    pub fn load(explicit: Option<&Path>) -> Result<CliConfig, CliError> {
        let mut builder = merge_policy::builder_with_defaults()?;
        builder = global_file::add_to_builder(builder)?;
        if let Some(path) = explicit {
            builder = explicit_file::add_to_builder(builder, path)?;
        }
        builder = environment::add_to_builder(builder);

        let config: CliConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    /// Load configuration from a single file over defaults, ignoring the global
    /// file and the environment.
    pub fn load_from_file(path: &Path) -> Result<CliConfig, CliError> {
        let builder = explicit_file::add_to_builder(merge_policy::builder_with_defaults()?, path)?;
        let config: CliConfig = builder.build()?.try_deserialize()?;
        Self::validated(config)
    }

    fn validated(config: CliConfig) -> Result<CliConfig, CliError> {
        config
            .validate()
            .map_err(|errors| CliError::Config(errors.join("; ")))?;
        debug!(endpoint = %config.fdio.endpoint, "Configuration loaded");
        Ok(config)
    }
}
