//! # cmdshelf-core
//!
//! Core functionality for cmdshelf - a personal shelf of reusable shell
//! command templates.
//!
//! Commands are grouped into named collections, each stored as one TOML file
//! in one of several configured directories. The crate resolves and edits
//! those files, filters commands by a search term, and expands a command's
//! template into the final shell line.
//!
//! ## Architecture
//!
//! - **Configuration**: root directory discovery and `config.toml`
//! - **Store**: collection resolution, loading, saving, export and import
//! - **Search**: case-insensitive filtering by collection, name and tags
//! - **Template**: `{{name}}` placeholders and `{? … ?}` optional blocks
//! - **Error Handling**: categorized errors for exit code mapping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use cmdshelf_core::{CollectionStore, Paths, search, template};
//! use std::collections::HashMap;
//!
//! let store = CollectionStore::open(Paths::discover()?)?;
//! let commands = store.get_all_commands();
//!
//! for command in search(&commands, "git") {
//!     let line = template::expand(&command.template, &command.parameters, &HashMap::new())?;
//!     println!("{}: {line}", command.label());
//! }
//! # Ok::<(), cmdshelf_core::Error>(())
//! ```
//!
//! All core operations are synchronous; the CLI decides how to schedule them.

/// Root directory discovery and configuration file handling
pub mod config;
/// Error types and result aliases
pub mod error;
/// Filtering commands by a search term
pub mod search;
/// Collection files on disk
pub mod store;
/// Placeholder and optional block expansion
pub mod template;
/// Core data types
pub mod types;

// Re-export commonly used types
pub use config::{BOOTSTRAP_COLLECTION, Config, HOME_ENV, Paths};
pub use error::{Error, Result};
pub use search::{matches, search};
pub use store::{
    CollectionStore, ImportSummary, LoadReport, SkippedCollection, validate_name,
};
pub use template::{Template, TemplateIssue, expand, lint};
pub use types::*;
