//! Create-collection command implementation

use anyhow::{Context, Result};
use cmdshelf_core::CollectionStore;
use colored::Colorize;

/// Register `name` and create its file. Succeeds if it already exists.
pub fn execute(store: &mut CollectionStore, name: &str) -> Result<()> {
    store
        .add_collection(name)
        .with_context(|| format!("Failed to create collection \"{name}\""))?;
    println!("{} Collection \"{name}\" created successfully!", "✓".green());
    Ok(())
}
