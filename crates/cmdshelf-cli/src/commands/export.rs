//! Export command implementation

use anyhow::{Context, Result};
use cmdshelf_core::CollectionStore;
use colored::Colorize;
use std::path::Path;

/// Write every collection and a config snapshot under `dir`.
pub fn execute(store: &CollectionStore, dir: &Path) -> Result<()> {
    let exported = store
        .export_all(dir)
        .with_context(|| format!("Failed to export to {}", dir.display()))?;

    println!(
        "{} Exported {} collection(s) to {}",
        "✓".green(),
        exported.len(),
        dir.display()
    );
    Ok(())
}
