//! CLI route: resolves an argument vector against the frozen command tree and
//! runs the resolved handler.

use crate::cli::help::render_help;
use crate::cli::output::format_error;
use crate::error::{CliError, HandlerError};
use crate::handler::Invocation;
use crate::tree::{CommandNode, CommandRegistry};
use std::sync::Arc;
use tracing::{debug, warn};

/// Process exit codes.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    /// Any failure surfaced by a handler
    pub const FAILURE: i32 = 1;
    /// Unresolved command path or malformed invocation
    pub const USAGE: i32 = 2;
}

/// Result of one dispatch: exit code plus text for stdout and stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    fn success(stdout: String) -> Self {
        Self {
            code: exit_code::SUCCESS,
            stdout,
            stderr: String::new(),
        }
    }

    fn error(code: i32, stderr: String) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr,
        }
    }
}

/// Read-only dispatcher over a frozen registry. Cheap to clone; safe to use from
/// many threads at once.
#[derive(Clone)]
pub struct Dispatcher {
    registry: Arc<CommandRegistry>,
}

impl Dispatcher {
    /// Refuses a registry whose registration phase did not complete.
    pub fn new(registry: Arc<CommandRegistry>) -> Result<Self, CliError> {
        if !registry.is_frozen() {
            return Err(CliError::TreeNotFrozen);
        }
        Ok(Self { registry })
    }

    pub fn dispatch<S: AsRef<str>>(&self, args: &[S]) -> Outcome {
        let args: Vec<String> = args.iter().map(|a| a.as_ref().to_string()).collect();
        let (node, consumed) = self.registry.resolve_longest(args.as_slice());
        let rest = &args[consumed..];
        debug!(command = %node.path(), remaining = rest.len(), "Resolved command");

        // Runnable commands own their flags, help included
        if !node.is_runnable()
            && matches!(rest.first().map(String::as_str), Some("-h") | Some("--help"))
        {
            return Outcome::success(render_help(&self.registry, node));
        }

        match node.handler_ref() {
            Some(handler) => {
                let invocation = Invocation {
                    path: node.path(),
                    args: rest,
                    registry: &self.registry,
                };
                match (**handler)(&invocation) {
                    Ok(stdout) => Outcome::success(stdout),
                    Err(e) => self.handler_failure(node, e),
                }
            }
            None => self.group_invoked(node, rest),
        }
    }

    fn group_invoked(&self, node: &CommandNode, rest: &[String]) -> Outcome {
        match rest.first() {
            Some(next) if !next.starts_with('-') => {
                let unknown = node.path().join(next);
                warn!(command = %unknown, "Unknown command");
                Outcome::error(
                    exit_code::USAGE,
                    format!(
                        "{}\nRun '{} --help' for usage.",
                        format_error(&format!("unknown command \"{}\"", unknown)),
                        self.usage_prefix(node)
                    ),
                )
            }
            _ => Outcome::error(exit_code::USAGE, render_help(&self.registry, node)),
        }
    }

    fn handler_failure(&self, node: &CommandNode, e: HandlerError) -> Outcome {
        match e {
            HandlerError::Usage(message) => Outcome::error(
                exit_code::USAGE,
                format!(
                    "{}\nRun '{} --help' for usage.",
                    format_error(&message),
                    self.usage_prefix(node)
                ),
            ),
            HandlerError::Help(text) => Outcome::success(text),
            HandlerError::Failed(err) => {
                warn!(command = %node.path(), error = %err, "Command failed");
                Outcome::error(exit_code::FAILURE, format_error(&format!("{:#}", err)))
            }
        }
    }

    fn usage_prefix(&self, node: &CommandNode) -> String {
        if node.path().is_root() {
            self.registry.program().to_string()
        } else {
            format!("{} {}", self.registry.program(), node.path())
        }
    }
}
