//! Interactive prompts: the command picker, the action menu and parameter input.
//!
//! Every prompt returns `Ok(None)` when the user cancels with Esc or Ctrl-C,
//! so callers can exit quietly instead of reporting an error.

use anyhow::Result;
use cmdshelf_core::{Command, Parameter, Template};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use inquire::{InquireError, Select, Text, required};
use std::collections::HashMap;
use std::fmt;
use std::io::IsTerminal;

use crate::output::picker_label;

/// Set to any value to disable every prompt.
pub const NON_INTERACTIVE_ENV: &str = "CMDSHELF_NON_INTERACTIVE";

const PICKER_PAGE_SIZE: usize = 15;

/// What to do with the picked command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    /// Expand and run through the shell
    Execute,
    /// Expand and copy to the clipboard
    Copy,
    /// Print the stored command without running it
    ShowDetails,
}

impl Action {
    /// Every action, in menu order
    pub const ALL: [Self; 3] = [Self::Execute, Self::Copy, Self::ShowDetails];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Execute => "Execute command",
            Self::Copy => "Copy to clipboard",
            Self::ShowDetails => "Show details",
        };
        f.write_str(label)
    }
}

/// Whether prompts can be shown: both stdin and stdout are terminals and
/// `CMDSHELF_NON_INTERACTIVE` is unset.
pub fn is_interactive() -> bool {
    std::env::var_os(NON_INTERACTIVE_ENV).is_none()
        && std::io::stdin().is_terminal()
        && std::io::stdout().is_terminal()
}

struct PickerItem<'a> {
    command: &'a Command,
    label: String,
}

impl fmt::Display for PickerItem<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Let the user pick one of `commands`, fuzzy-filtering as they type.
pub fn pick_command<'a>(commands: &[&'a Command]) -> Result<Option<&'a Command>> {
    let items: Vec<PickerItem<'a>> = commands
        .iter()
        .map(|&command| PickerItem {
            command,
            label: picker_label(command),
        })
        .collect();

    let matcher = SkimMatcherV2::default();
    let scorer = |input: &str, _item: &PickerItem<'a>, label: &str, _idx: usize| -> Option<i64> {
        if input.is_empty() {
            Some(0)
        } else {
            matcher.fuzzy_match(label, input)
        }
    };

    let picked = Select::new("Select a command:", items)
        .with_scorer(&scorer)
        .with_page_size(PICKER_PAGE_SIZE)
        .prompt();
    Ok(cancellable(picked)?.map(|item| item.command))
}

/// Ask what to do with the picked command.
pub fn choose_action() -> Result<Option<Action>> {
    let chosen = Select::new("What would you like to do?", Action::ALL.to_vec()).prompt();
    cancellable(chosen)
}

/// Prompt for each parameter of `template` in declared order.
///
/// Required parameters without a default must be answered; everything
/// else may be left empty.
pub fn prompt_values(
    template: &str,
    parameters: &[Parameter],
) -> Result<Option<HashMap<String, String>>> {
    let scanned = Template::parse(template)?;
    let mut values = HashMap::with_capacity(parameters.len());

    for param in parameters {
        let message = parameter_message(param, scanned.has_block_for(&param.name));
        let mut prompt = Text::new(&message);
        if !param.description.is_empty() {
            prompt = prompt.with_help_message(&param.description);
        }
        if param.needs_value() {
            prompt = prompt.with_validator(required!("This parameter is required"));
        }

        let Some(value) = cancellable(prompt.prompt())? else {
            return Ok(None);
        };
        values.insert(param.name.clone(), value);
    }

    Ok(Some(values))
}

/// Prompt for a free-form value; `required` rejects empty input.
pub fn prompt_text(message: &str, required: bool) -> Result<Option<String>> {
    let mut prompt = Text::new(message);
    if required {
        prompt = prompt.with_validator(required!());
    }
    cancellable(prompt.prompt())
}

/// `name*` for values that must be typed, plus the default in parentheses.
///
/// An optional parameter inside a `{? … ?}` block never falls back to its
/// default: leaving it empty drops the block, so the default is not shown.
fn parameter_message(param: &Parameter, in_block: bool) -> String {
    let mut message = param.name.clone();
    if param.needs_value() {
        message.push('*');
    }
    if param.optional && in_block {
        message.push_str(" [optional, leave empty to omit]");
    } else {
        if !param.default_value.is_empty() {
            message.push_str(&format!(" ({})", param.default_value));
        }
        if param.optional {
            message.push_str(" [optional]");
        }
    }
    message.push(':');
    message
}

fn cancellable<T>(result: Result<T, InquireError>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(e.into()),
    }
}
