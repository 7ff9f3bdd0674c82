//! CLI domain: global flag parsing, dispatch against the frozen command tree,
//! help rendering, and output formatting.

mod help;
mod output;
mod parse;
mod route;

pub use help::{render_help, render_tree};
pub use output::{format_error, map_error};
pub use parse::Cli;
pub use route::{exit_code, Dispatcher, Outcome};
