//! End-to-end use of the public API: store, search and expand together.

#![allow(clippy::unwrap_used)]

use cmdshelf_core::{
    CollectionStore, Command, Config, Error, Parameter, Paths, Result, expand, search,
};
use std::collections::HashMap;
use std::fs;
use tempfile::TempDir;

fn archive_command() -> Command {
    Command {
        name: "Archive dir".to_string(),
        description: "Create a tarball".to_string(),
        template: "tar -c {?-C {{dir}} ?}-f {{out}} .".to_string(),
        tags: vec!["backup".to_string()],
        parameters: vec![
            Parameter {
                name: "out".to_string(),
                description: "Output file".to_string(),
                default_value: "out.tar".to_string(),
                optional: false,
            },
            Parameter {
                name: "dir".to_string(),
                description: "Change to directory".to_string(),
                default_value: String::new(),
                optional: true,
            },
        ],
        collection: String::new(),
    }
}

#[test]
fn saved_command_can_be_found_and_expanded() -> Result<()> {
    // Given: A fresh shelf with one saved command
    let root = TempDir::new()?;
    let mut store = CollectionStore::open(Paths::with_root(root.path()))?;
    store.add_collection("ops")?;
    store.save_command(&archive_command(), "ops")?;

    // When: Searching by tag in any case and expanding
    let all = store.get_all_commands();
    let hits = search(&all, "BACKUP");
    assert_eq!(hits.len(), 1);
    let hit = hits[0];

    let mut values = HashMap::new();
    let plain = expand(&hit.template, &hit.parameters, &values)?;
    values.insert("dir".to_string(), "/srv".to_string());
    let scoped = expand(&hit.template, &hit.parameters, &values)?;

    // Then: The command came from its collection and expands both ways
    assert_eq!(hit.collection, "ops");
    assert_eq!(plain, "tar -c -f out.tar .");
    assert_eq!(scoped, "tar -c -C /srv -f out.tar .");
    Ok(())
}

#[test]
fn shared_directory_is_shadowed_by_user_directory() -> Result<()> {
    // Given: A shared directory registered before the user directory
    let root = TempDir::new()?;
    let paths = Paths::with_root(root.path());
    Config {
        collection_dirs: vec!["shared".into(), "mine".into()],
        ..Config::default()
    }
    .save(&paths)?;
    fs::create_dir_all(root.path().join("shared"))?;
    fs::write(
        root.path().join("shared/git.toml"),
        "[[commands]]\nname = \"Log\"\ncommand = \"git log\"\n",
    )?;

    let store = CollectionStore::open(paths)?;
    assert_eq!(store.get_commands("git")?[0].template, "git log");

    // When: The user directory gains its own copy of the collection
    fs::create_dir_all(root.path().join("mine"))?;
    fs::write(
        root.path().join("mine/git.toml"),
        "[[commands]]\nname = \"Log\"\ncommand = \"git log --graph\"\n",
    )?;

    // Then: Lookups and saves go to the user copy only
    assert_eq!(store.get_commands("git")?[0].template, "git log --graph");
    assert_eq!(store.list_collections(), vec!["git".to_string()]);

    let mut log = store.get_commands("git")?.remove(0);
    log.template = "git log --graph --oneline".to_string();
    store.save_command(&log, "git")?;

    let shared = fs::read_to_string(root.path().join("shared/git.toml"))?;
    assert!(shared.contains("command = \"git log\""));
    let mine = fs::read_to_string(root.path().join("mine/git.toml"))?;
    assert!(mine.contains("--oneline"));
    Ok(())
}

#[test]
fn missing_required_value_is_reported_by_name() {
    let mut cmd = archive_command();
    cmd.parameters[0].default_value.clear();

    let err = expand(&cmd.template, &cmd.parameters, &HashMap::new()).unwrap_err();

    assert!(matches!(err, Error::UnresolvedInput { ref parameter } if parameter == "out"));
}
