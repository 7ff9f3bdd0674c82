//! vppcli: Command-line client for fdio data-plane services
//!
//! The command surface is assembled from independently generated client modules.
//! Each module contributes a subtree to a shared command registry during startup;
//! the tree is then frozen and handed to the dispatcher.

pub mod cli;
pub mod config;
pub mod error;
pub mod handler;
pub mod logging;
pub mod modules;
pub mod registrar;
pub mod tree;

pub use error::{BuildError, CliError, HandlerError, RegistryError};
pub use handler::{Handler, Invocation};
pub use registrar::ModuleRegistrar;
pub use tree::{BuildState, CommandNode, CommandPath, CommandRegistry, CommandSink, TreeBuilder};
