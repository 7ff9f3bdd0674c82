//! CLI parse: clap types for the global flags. No behavior; definitions only.
//!
//! Command paths are not clap subcommands: everything after the global flags is
//! collected verbatim and resolved against the frozen command tree.

use clap::Parser;
use std::path::PathBuf;

/// vppcli - fdio data-plane client
#[derive(Parser, Debug)]
#[command(name = "vppcli", version)]
#[command(about = "Command-line client for fdio data-plane services")]
pub struct Cli {
    /// Configuration file path (layered over the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable logging
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Command path followed by its arguments
    #[arg(
        value_name = "COMMAND",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub command: Vec<String>,
}
