//! cmdshelf CLI - store, search and re-run shell command templates
//!
//! The binary in `main.rs` is a thin wrapper around [`run`]; every
//! subcommand lives in its own module under `commands`.

use anyhow::{Context, Result};
use clap::Parser;
use cmdshelf_core::{CollectionStore, Paths};
use std::process::ExitCode;
use tracing::debug;

mod cli;
mod commands;
pub mod error;
mod output;
mod prompt;
mod utils;

use crate::utils::initialize_logging;
use cli::{Cli, Commands};

/// Execute the cmdshelf CLI with the current arguments and environment.
///
/// The returned exit code is the executed command's when one was run.
///
/// # Errors
///
/// Returns an error if the store cannot be opened or the command fails.
pub async fn run() -> Result<ExitCode> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let paths = match &cli.home {
        Some(home) => Paths::with_root(home.clone()),
        None => Paths::discover().context("Failed to locate the cmdshelf directory")?,
    };
    debug!(root = %paths.root().display(), "Using cmdshelf directory");

    let store = CollectionStore::open(paths).context("Failed to open the command store")?;
    execute_command(cli, store).await
}

async fn execute_command(cli: Cli, mut store: CollectionStore) -> Result<ExitCode> {
    match cli.command {
        None => return pick_from_all(&store).await,
        Some(Commands::Search {
            term,
            collection,
            format,
        }) => {
            return commands::search_commands(
                &store,
                term.as_deref(),
                collection.as_deref(),
                format,
            )
            .await;
        },
        Some(Commands::List { collection, format }) => {
            commands::list_commands(&store, collection.as_deref(), format)?;
        },
        Some(Commands::Collections { format }) => commands::list_collections(&store, format)?,
        Some(Commands::CreateCollection { name }) => {
            commands::create_collection(&mut store, &name)?;
        },
        Some(Commands::SetDefault { name }) => commands::set_default(&mut store, &name)?,
        Some(Commands::Add(args)) => commands::add_command(&mut store, args)?,
        Some(Commands::Export { dir }) => commands::export_collections(&store, &dir)?,
        Some(Commands::Import { dir }) => commands::import_collections(&mut store, &dir)?,
    }

    Ok(ExitCode::SUCCESS)
}

/// Bare `cmdshelf`: pick from every readable collection.
///
/// Unreadable collections are reported once, by the store's `warn!`.
async fn pick_from_all(store: &CollectionStore) -> Result<ExitCode> {
    if !prompt::is_interactive() {
        return Err(error::CliError::usage(anyhow::anyhow!(
            "no subcommand given and not running in a terminal; try `cmdshelf list` or `cmdshelf search`"
        ))
        .into());
    }

    let commands = store.get_all_commands();
    let candidates: Vec<_> = commands.iter().collect();
    commands::pick_and_act(&candidates).await
}
