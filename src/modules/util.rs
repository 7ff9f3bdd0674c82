//! Utility commands: `util version`, `util tree` and `util config`.

use crate::cli::render_tree;
use crate::config::CliConfig;
use crate::error::{HandlerError, RegistryError};
use crate::handler::handler;
use crate::registrar::ModuleRegistrar;
use crate::tree::{CommandNode, CommandPath, CommandSink};
use clap::Parser;
use std::sync::Arc;

pub const MODULE_ID: &str = "util";

/// Utility commands take no flags beyond `--help`.
#[derive(Parser, Debug)]
struct NoArgs {}

pub struct UtilRegistrar {
    config: Arc<CliConfig>,
}

impl UtilRegistrar {
    pub fn new(config: CliConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

impl ModuleRegistrar for UtilRegistrar {
    fn id(&self) -> &str {
        MODULE_ID
    }

    fn register(&self, sink: &mut dyn CommandSink) -> Result<(), RegistryError> {
        let config = Arc::clone(&self.config);
        let util = CommandNode::group("util", "Utility commands")
            .with_child(CommandNode::new("version", "Print the client version").handler(
                handler(|inv| {
                    inv.parse_args::<NoArgs>()?;
                    Ok(format!(
                        "{} {}",
                        inv.registry.program(),
                        env!("CARGO_PKG_VERSION")
                    ))
                }),
            ))?
            .with_child(
                CommandNode::new("tree", "Print every registered command").handler(handler(
                    |inv| {
                        inv.parse_args::<NoArgs>()?;
                        Ok(render_tree(inv.registry))
                    },
                )),
            )?
            .with_child(
                CommandNode::new("config", "Print the effective configuration as TOML")
                    .detail("Defaults, config files and VPPCLI_* environment overrides merged.")
                    .handler(handler(move |inv| {
                        inv.parse_args::<NoArgs>()?;
                        config
                            .to_toml()
                            .map_err(|e| HandlerError::Failed(e.into()))
                    })),
            )?;
        sink.attach(&CommandPath::root(), util)
    }
}
