//! # Output Format Dispatch
//!
//! [`OutputFormat`] is selected on the command line via clap's `ValueEnum`
//! derive. The formatters below pick the text or JSON implementation for
//! each kind of listing so commands never branch on the format themselves.

use anyhow::Result;
use cmdshelf_core::Command;

use super::{json::JsonFormatter, text::TextFormatter};

/// Output format options supported by the CLI
///
/// ```bash
/// # Default text output
/// cmdshelf list
///
/// # JSON for scripts
/// cmdshelf list --format json | jq '.[].name'
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Colored text output (default)
    Text,
    /// Single pretty-printed JSON array
    Json,
}

impl OutputFormat {
    /// Whether this format is meant for other programs.
    #[must_use]
    pub const fn is_machine_readable(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Formatter for command listings
pub struct CommandFormatter {
    format: OutputFormat,
}

impl CommandFormatter {
    /// Create a formatter for `format`
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print `commands` under an optional text heading.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, commands: &[&Command], heading: Option<&str>) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                TextFormatter::format_commands(commands, heading);
                Ok(())
            },
            OutputFormat::Json => JsonFormatter::format_commands(commands),
        }
    }
}

/// Formatter for collection listings
pub struct CollectionFormatter {
    format: OutputFormat,
}

impl CollectionFormatter {
    /// Create a formatter for `format`
    #[must_use]
    pub const fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Print collection `names`, marking `default`.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn format(&self, names: &[String], default: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => {
                TextFormatter::format_collections(names, default);
                Ok(())
            },
            OutputFormat::Json => JsonFormatter::format_collections(names, default),
        }
    }
}
