//! Add command implementation

use anyhow::{Context, Result};
use cmdshelf_core::{CollectionStore, Command, lint};
use colored::Colorize;
use tracing::debug;

use crate::cli::AddArgs;
use crate::error::CliError;
use crate::prompt;

/// Save a new command, replacing any command with the same slug.
///
/// Missing `--name` and `--command` are prompted for on a terminal and are
/// usage errors otherwise. The collection is created when it does not exist.
pub fn execute(store: &mut CollectionStore, args: AddArgs) -> Result<()> {
    let interactive = prompt::is_interactive();

    let Some(name) = require(args.name, "--name", "Name:", interactive)? else {
        return Ok(());
    };
    let Some(template) = require(args.template, "--command", "Command:", interactive)? else {
        return Ok(());
    };

    let mut description = args.description.unwrap_or_default();
    let mut tags = args.tags;
    if interactive && description.is_empty() {
        description = prompt::prompt_text("Description:", false)?.unwrap_or_default();
    }
    if interactive && tags.is_empty() {
        tags = prompt::prompt_text("Tags (comma-separated):", false)?
            .map(|raw| split_tags(&raw))
            .unwrap_or_default();
    }
    tags.retain(|tag| !tag.trim().is_empty());

    let collection = args
        .collection
        .unwrap_or_else(|| store.default_collection().to_string());

    for issue in lint(&template, &args.params).context("Invalid command template")? {
        eprintln!("{} {issue}", "warning:".yellow());
    }

    let command = Command {
        name: name.trim().to_string(),
        description,
        template,
        tags,
        parameters: args.params,
        collection: collection.clone(),
    };
    debug!(slug = %command.slug(), %collection, "Saving command");

    store
        .add_collection(&collection)
        .with_context(|| format!("Failed to create collection \"{collection}\""))?;
    store
        .save_command(&command, &collection)
        .with_context(|| format!("Failed to save \"{}\"", command.name))?;

    println!(
        "{} Saved \"{}\" to collection \"{collection}\"",
        "✓".green(),
        command.name
    );
    Ok(())
}

/// Take `value` as given, prompt for it, or fail with a usage error.
///
/// `Ok(None)` means the user cancelled the prompt.
fn require(
    value: Option<String>,
    flag: &str,
    message: &str,
    interactive: bool,
) -> Result<Option<String>> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(Some(value)),
        _ if interactive => prompt::prompt_text(message, true),
        _ => Err(CliError::usage(anyhow::anyhow!(
            "{flag} is required when not running interactively"
        ))
        .into()),
    }
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}
