//! Tracing subscriber and color setup.
//!
//! Logs always go to stderr: stdout carries listings, JSON and the output
//! of executed commands.

use anyhow::Result;
use colored::control as color_control;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use crate::cli::{Cli, Commands};
use crate::output::OutputFormat;

/// Install the global subscriber and decide whether output is colored.
///
/// # Errors
///
/// Returns an error if a global subscriber is already set.
pub fn initialize_logging(cli: &Cli) -> Result<()> {
    let machine_output = command_format(cli).is_some_and(OutputFormat::is_machine_readable);

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(cli.verbose, cli.quiet, machine_output))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    if cli.no_color || machine_output || std::env::var_os("NO_COLOR").is_some() {
        color_control::set_override(false);
    }
    Ok(())
}

/// WARN by default; `--verbose` wins over `--quiet` and JSON output.
const fn log_level(verbose: bool, quiet: bool, machine_output: bool) -> Level {
    if verbose {
        Level::DEBUG
    } else if quiet || machine_output {
        Level::ERROR
    } else {
        Level::WARN
    }
}

const fn command_format(cli: &Cli) -> Option<OutputFormat> {
    match &cli.command {
        Some(
            Commands::List { format, .. }
            | Commands::Search { format, .. }
            | Commands::Collections { format },
        ) => Some(*format),
        _ => None,
    }
}
