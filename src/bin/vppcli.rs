//! vppcli Binary
//!
//! Composition root: loads configuration, builds and freezes the command tree
//! from the declared module list, then dispatches the command line.

use clap::Parser;
use std::process;
use std::sync::Arc;
use tracing::{error, info};
use vppcli::cli::{exit_code, map_error, Cli, Dispatcher};
use vppcli::config::{CliConfig, ConfigLoader};
use vppcli::error::CliError;
use vppcli::logging::{init_logging, LoggingConfig};
use vppcli::modules::build_command_tree;

fn main() {
    let cli = Cli::parse();

    let config = match ConfigLoader::load(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code::FAILURE);
        }
    };

    // Initialize logging before registration so startup is observable
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(&logging_config) {
        eprintln!("{}", map_error(&e));
        process::exit(exit_code::FAILURE);
    }

    info!("vppcli starting");

    let registry = match build_command_tree(&config) {
        Ok(registry) => registry,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("{}", map_error(&CliError::from(e)));
            process::exit(exit_code::FAILURE);
        }
    };

    let dispatcher = match Dispatcher::new(Arc::new(registry)) {
        Ok(dispatcher) => dispatcher,
        Err(e) => {
            eprintln!("{}", map_error(&e));
            process::exit(exit_code::FAILURE);
        }
    };

    let outcome = dispatcher.dispatch(cli.command.as_slice());
    if !outcome.stdout.is_empty() {
        println!("{}", outcome.stdout.trim_end());
    }
    if !outcome.stderr.is_empty() {
        eprintln!("{}", outcome.stderr.trim_end());
    }
    info!(code = outcome.code, "Command finished");
    process::exit(outcome.code);
}

/// Build logging configuration from CLI args and the loaded config.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, config: &CliConfig) -> LoggingConfig {
    let mut logging = config.logging.clone();

    if cli.quiet {
        logging.enabled = false;
    }
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        logging.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        logging.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        logging.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        logging.file = Some(file.clone());
    }

    logging
}
