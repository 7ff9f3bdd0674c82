//! Error types for command tree registration, startup, and dispatch.

use crate::tree::CommandPath;
use thiserror::Error;

/// Command tree errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("Duplicate command name \"{name}\" under {parent}")]
    DuplicateName { parent: CommandPath, name: String },

    #[error("Command tree is frozen; cannot attach \"{name}\" under {parent}")]
    FrozenTree { parent: CommandPath, name: String },

    #[error("unknown command \"{0}\"")]
    NotFound(CommandPath),

    #[error("Invalid command name \"{name}\": {reason}")]
    InvalidName { name: String, reason: &'static str },
}

/// Startup errors raised while the tree builder runs its registrars
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Registrar \"{registrar}\" failed: {source}")]
    Registration {
        registrar: String,
        #[source]
        source: RegistryError,
    },

    #[error("Registrar \"{0}\" is listed more than once")]
    DuplicateRegistrar(String),

    #[error("Tree builder has already run")]
    AlreadyRun,
}

impl BuildError {
    /// The registry error that aborted registration, if any.
    pub fn registry_error(&self) -> Option<&RegistryError> {
        match self {
            BuildError::Registration { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Errors surfaced by command handlers
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Malformed invocation: bad flags or arguments
    #[error("{0}")]
    Usage(String),

    /// Help or version text requested through the handler's own flags
    #[error("{0}")]
    Help(String),

    #[error(transparent)]
    Failed(#[from] anyhow::Error),
}

/// Top-level process errors
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Logging error: {0}")]
    Logging(String),

    #[error("Startup failed: {0}")]
    Build(#[from] BuildError),

    #[error("Command tree is not frozen; registration did not complete")]
    TreeNotFrozen,
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::Config(err.to_string())
    }
}
