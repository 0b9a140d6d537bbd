//! Interactive pick-and-act flow shared by `search` and the bare `cmdshelf` invocation.

use anyhow::{Context, Result};
use cmdshelf_core::{Command, expand};
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;

use crate::output::format_details;
use crate::prompt::{self, Action};
use crate::utils::clipboard::copy_to_clipboard;
use crate::utils::shell::{Shell, exit_code_for};

/// Pick one of `candidates`, choose an action and carry it out.
///
/// Cancelling any prompt exits successfully without doing anything. When
/// the command is executed, its exit status becomes ours.
pub async fn run(candidates: &[&Command]) -> Result<ExitCode> {
    if candidates.is_empty() {
        println!("{}", "No commands found.".yellow());
        return Ok(ExitCode::SUCCESS);
    }

    let Some(selected) = prompt::pick_command(candidates)? else {
        return Ok(ExitCode::SUCCESS);
    };
    let Some(action) = prompt::choose_action()? else {
        return Ok(ExitCode::SUCCESS);
    };
    debug!(command = %selected.label(), ?action, "Selected");

    match action {
        Action::ShowDetails => {
            println!("\n{}", format_details(selected));
            Ok(ExitCode::SUCCESS)
        },
        Action::Copy => {
            let Some(line) = resolve_line(selected)? else {
                return Ok(ExitCode::SUCCESS);
            };
            copy_to_clipboard(&line).context("Failed to write to the clipboard")?;
            println!("{}", "Command copied to clipboard!".green());
            Ok(ExitCode::SUCCESS)
        },
        Action::Execute => {
            let Some(line) = resolve_line(selected)? else {
                return Ok(ExitCode::SUCCESS);
            };
            execute_line(&line).await
        },
    }
}

/// Prompt for parameter values and expand the template.
fn resolve_line(command: &Command) -> Result<Option<String>> {
    let Some(values) = prompt::prompt_values(&command.template, &command.parameters)? else {
        return Ok(None);
    };
    let line = expand(&command.template, &command.parameters, &values)
        .with_context(|| format!("Failed to expand \"{}\"", command.name))?;
    Ok(Some(line))
}

/// Run `line` through the user's shell and wait for it.
async fn execute_line(line: &str) -> Result<ExitCode> {
    let shell = Shell::detect();
    eprintln!("{} {line}", "Executing:".yellow());

    let handle = shell
        .spawn(line)
        .with_context(|| format!("Failed to start {}", shell.program()))?;
    let status = handle
        .await
        .context("Command task panicked")?
        .context("Failed to wait for command")?;

    debug!(%status, "Command finished");
    Ok(ExitCode::from(exit_code_for(status)))
}
