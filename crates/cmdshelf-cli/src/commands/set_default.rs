//! Set-default command implementation

use anyhow::Result;
use cmdshelf_core::{CollectionStore, Error};
use colored::Colorize;

/// Make `name` the default collection.
pub fn execute(store: &mut CollectionStore, name: &str) -> Result<()> {
    match store.set_default_collection(name) {
        Ok(()) => {
            println!("{} Default collection set to \"{name}\"", "✓".green());
            Ok(())
        },
        Err(err @ Error::NotFound(_)) => Err(anyhow::Error::new(err).context(format!(
            "Collection \"{name}\" does not exist. Create it first with `cmdshelf create-collection {name}`"
        ))),
        Err(err) => Err(err.into()),
    }
}
