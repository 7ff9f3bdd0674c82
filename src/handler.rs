//! Command handlers: the callable attached to a runnable command node.

use crate::error::HandlerError;
use crate::tree::{CommandPath, CommandRegistry};
use clap::error::ErrorKind;
use std::sync::Arc;

/// Shared, thread-safe handler reference.
///
/// Handlers return the text to print on stdout. A frozen tree only ever calls them
/// through `&self`, so any number of dispatches may run concurrently.
pub type Handler = Arc<dyn Fn(&Invocation<'_>) -> Result<String, HandlerError> + Send + Sync>;

/// Everything a handler sees when it runs.
pub struct Invocation<'a> {
    /// Resolved path of the command being run
    pub path: &'a CommandPath,
    /// Arguments remaining after the command path
    pub args: &'a [String],
    /// The frozen registry the command was resolved from
    pub registry: &'a CommandRegistry,
}

impl<'a> Invocation<'a> {
    /// Full command line prefix, e.g. `vppcli fdio interface list`.
    pub fn command_line(&self) -> String {
        if self.path.is_root() {
            self.registry.program().to_string()
        } else {
            format!("{} {}", self.registry.program(), self.path)
        }
    }

    /// Parse the remaining arguments into a clap argument struct.
    ///
    /// `--help` (and `--version` where declared) map to `HandlerError::Help`
    /// carrying the rendered text; other parse failures map to
    /// `HandlerError::Usage`.
    pub fn parse_args<T: clap::Parser>(&self) -> Result<T, HandlerError> {
        let bin = self.command_line();
        T::try_parse_from(std::iter::once(bin).chain(self.args.iter().cloned())).map_err(|e| {
            let rendered = e.to_string();
            let message = rendered.trim_end();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    HandlerError::Help(message.to_string())
                }
                _ => HandlerError::Usage(
                    message.strip_prefix("error: ").unwrap_or(message).to_string(),
                ),
            }
        })
    }
}

/// Wrap a closure as a `Handler`.
pub fn handler<F>(f: F) -> Handler
where
    F: Fn(&Invocation<'_>) -> Result<String, HandlerError> + Send + Sync + 'static,
{
    Arc::new(f)
}
