//! Search command implementation

use anyhow::{Context, Result};
use cmdshelf_core::{CollectionStore, Command, search};
use std::process::ExitCode;

use crate::output::{CommandFormatter, OutputFormat};
use crate::prompt;

use super::pick;

/// Filter commands by `term` and either pick one interactively or print them.
///
/// The picker is used only for text output on a terminal, so piping
/// `cmdshelf search` always yields a plain listing.
pub async fn execute(
    store: &CollectionStore,
    term: Option<&str>,
    collection: Option<&str>,
    format: OutputFormat,
) -> Result<ExitCode> {
    let commands = load_candidates(store, collection)?;
    let term = term.unwrap_or("");
    let matches = search(&commands, term);

    if format == OutputFormat::Text && prompt::is_interactive() {
        return pick::run(&matches).await;
    }

    let heading = if term.is_empty() {
        "All commands:".to_string()
    } else {
        format!("Commands matching \"{term}\":")
    };
    CommandFormatter::new(format).format(&matches, Some(&heading))?;
    Ok(ExitCode::SUCCESS)
}

fn load_candidates(store: &CollectionStore, collection: Option<&str>) -> Result<Vec<Command>> {
    match collection {
        Some(name) => store
            .get_commands(name)
            .with_context(|| format!("Failed to search collection '{name}'")),
        None => Ok(store.get_all_commands()),
    }
}
