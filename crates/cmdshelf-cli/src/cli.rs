//! # CLI Structure and Argument Parsing
//!
//! The command-line interface for `cmdshelf`, built with `clap` derive macros.
//!
//! - **Global options** apply to every command (`--verbose`, `--quiet`,
//!   `--no-color`, `--home`)
//! - **Default command**: with no subcommand, an interactive search over
//!   every collection is started
//! - **Subcommands** list, search and edit collections
//!
//! ```bash
//! # Pick a command interactively and run it
//! cmdshelf
//!
//! # Filter first, then pick
//! cmdshelf search docker
//!
//! # Save a new command with an optional flag block
//! cmdshelf add --name "Archive" \
//!     --command 'tar -c {?-C {{dir}} ?}-f {{out}} .' \
//!     --param 'dir?:Change to directory' --param 'out=out.tar'
//!
//! # Script-friendly listing
//! cmdshelf list -c git --format json
//! ```

use clap::{Args, Parser, Subcommand};
use cmdshelf_core::Parameter;
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::utils::parsing::parse_param_spec;

/// Main CLI structure for the `cmdshelf` command
#[derive(Parser, Clone, Debug)]
#[command(name = "cmdshelf")]
#[command(version)]
#[command(about = "cmdshelf - store, search and re-run shell command templates", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Show debug logging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// Suppress informational messages (only show errors)
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable all ANSI colors in output (also respects `NO_COLOR` env)
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,

    /// Directory holding config.toml and collections. Also via `CMDSHELF_HOME`.
    #[arg(long, global = true, value_name = "DIR", env = "CMDSHELF_HOME")]
    pub home: Option<PathBuf>,
}

/// Available subcommands for the `cmdshelf` CLI
#[derive(Subcommand, Clone, Debug)]
pub enum Commands {
    /// List commands in a collection (the default collection unless -c is given)
    List {
        /// Collection to list
        #[arg(short = 'c', long)]
        collection: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Search commands by collection, name or tag
    ///
    /// Opens the interactive picker when attached to a terminal with text
    /// output; otherwise prints the matches.
    Search {
        /// Case-insensitive search term; empty matches everything
        term: Option<String>,

        /// Restrict the search to one collection
        #[arg(short = 'c', long)]
        collection: Option<String>,

        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// List all collections
    Collections {
        /// Output format
        #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Create a new collection
    #[command(name = "create-collection")]
    CreateCollection {
        /// Collection name (letters, digits, '-' and '_')
        name: String,
    },

    /// Set the default collection
    #[command(name = "set-default")]
    SetDefault {
        /// Existing collection name
        name: String,
    },

    /// Add or replace a command
    Add(AddArgs),

    /// Export all collections to a directory
    Export {
        /// Target directory
        dir: PathBuf,
    },

    /// Import collections from a directory written by `export`
    Import {
        /// Source directory
        dir: PathBuf,
    },
}

/// Arguments for `cmdshelf add`
///
/// Missing `--name` and `--command` are prompted for when running in a terminal.
#[derive(Args, Clone, Debug)]
pub struct AddArgs {
    /// Command name; an existing command with the same slug is replaced
    #[arg(short = 'n', long)]
    pub name: Option<String>,

    /// Command template, e.g. 'ssh {?-p {{port}} ?}{{host}}'
    #[arg(long = "command", value_name = "TEMPLATE")]
    pub template: Option<String>,

    /// Free-form description
    #[arg(short = 'd', long)]
    pub description: Option<String>,

    /// Search tag (repeatable or comma-separated)
    #[arg(short = 't', long = "tag", value_delimiter = ',')]
    pub tags: Vec<String>,

    /// Parameter spec `name[?][:description][=default]` (repeatable)
    #[arg(short = 'p', long = "param", value_name = "SPEC", value_parser = parse_param_spec)]
    pub params: Vec<Parameter>,

    /// Collection to save into (defaults to the default collection)
    #[arg(short = 'c', long)]
    pub collection: Option<String>,
}
