//! Import command implementation

use anyhow::{Context, Result};
use cmdshelf_core::CollectionStore;
use colored::Colorize;
use std::path::Path;

/// Merge an export directory into the local collections.
pub fn execute(store: &mut CollectionStore, dir: &Path) -> Result<()> {
    let summary = store
        .import_all(dir)
        .with_context(|| format!("Failed to import from {}", dir.display()))?;

    println!(
        "{} Imported {} command(s) into {} collection(s)",
        "✓".green(),
        summary.commands,
        summary.collections.len()
    );
    Ok(())
}
