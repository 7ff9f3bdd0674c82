//! CLI output: error mapping from domain errors to the stable CLI surface.

use crate::error::CliError;
use owo_colors::{OwoColorize, Stream};

/// Map startup errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    format_error(&e.to_string())
}

/// Prefix a message with `error:`, colored when stderr is a terminal.
pub fn format_error(message: &str) -> String {
    format!(
        "{} {}",
        "error:".if_supports_color(Stream::Stderr, |text| text.red()),
        message
    )
}
