//! Collections command implementation

use anyhow::Result;
use cmdshelf_core::CollectionStore;

use crate::output::{CollectionFormatter, OutputFormat};

/// Print registered and on-disk collections, marking the default.
pub fn execute(store: &CollectionStore, format: OutputFormat) -> Result<()> {
    let names = store.known_collections();
    CollectionFormatter::new(format).format(&names, store.default_collection())
}
