//! List command implementation

use anyhow::{Context, Result};
use cmdshelf_core::CollectionStore;

use crate::output::{CommandFormatter, OutputFormat};

/// Print every command of `collection`, or of the default collection.
pub fn execute(
    store: &CollectionStore,
    collection: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let name = collection.unwrap_or_else(|| store.default_collection());
    let commands = store
        .get_commands(name)
        .with_context(|| format!("Failed to list collection '{name}'"))?;

    let refs: Vec<_> = commands.iter().collect();
    let heading = format!("Commands in collection \"{name}\":");
    CommandFormatter::new(format).format(&refs, Some(&heading))
}
