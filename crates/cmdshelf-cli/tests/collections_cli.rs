mod common;

use common::cmdshelf_cmd;
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

#[test]
fn first_run_bootstraps_default_collection() -> anyhow::Result<()> {
    let home = tempdir()?;

    let out = cmdshelf_cmd(home.path())
        .args(["collections", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v, serde_json::json!([{ "name": "default", "default": true }]));
    assert!(home.path().join("config.toml").exists());
    assert!(home.path().join("collections/default.toml").exists());
    Ok(())
}

#[test]
fn create_collection_then_set_default() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["create-collection", "ops"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Collection \"ops\" created"));

    cmdshelf_cmd(home.path())
        .args(["set-default", "ops"])
        .assert()
        .success();

    let out = cmdshelf_cmd(home.path())
        .args(["collections", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out)?;
    let defaults: Vec<&str> = v
        .as_array()
        .into_iter()
        .flatten()
        .filter(|entry| entry["default"] == true)
        .filter_map(|entry| entry["name"].as_str())
        .collect();
    assert_eq!(defaults, vec!["ops"]);
    Ok(())
}

#[test]
fn set_default_on_missing_collection_exits_not_found() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["set-default", "missing"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("create-collection missing"));
    Ok(())
}

#[test]
fn invalid_collection_name_is_usage_error() -> anyhow::Result<()> {
    let home = tempdir()?;

    // Given: a name with path traversal
    // When: creating it
    // Then: exit code 2 and nothing is written outside the home
    cmdshelf_cmd(home.path())
        .args(["create-collection", "../escape"])
        .assert()
        .code(2)
        .stderr(predicate::str::starts_with("error:"));
    assert!(!home.path().join("escape.toml").exists());
    Ok(())
}

#[test]
fn export_then_import_into_fresh_home() -> anyhow::Result<()> {
    let source = tempdir()?;
    let target = tempdir()?;
    let snapshot = tempdir()?;

    common::add_archive(source.path());
    cmdshelf_cmd(source.path())
        .args(["create-collection", "ops"])
        .assert()
        .success();

    cmdshelf_cmd(source.path())
        .arg("export")
        .arg(snapshot.path())
        .assert()
        .success();

    cmdshelf_cmd(target.path())
        .arg("import")
        .arg(snapshot.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 1 command(s)"));

    let out = cmdshelf_cmd(target.path())
        .args(["list", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v[0]["slug"], "archive-dir");

    cmdshelf_cmd(target.path())
        .arg("collections")
        .assert()
        .success()
        .stdout(predicate::str::contains("ops"));
    Ok(())
}

#[test]
fn import_without_snapshot_exits_not_found() -> anyhow::Result<()> {
    let home = tempdir()?;
    let empty = tempdir()?;

    cmdshelf_cmd(home.path())
        .arg("import")
        .arg(empty.path())
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn unreadable_config_exits_io() -> anyhow::Result<()> {
    let home = tempdir()?;
    std::fs::create_dir_all(home.path().join("config.toml"))?;

    cmdshelf_cmd(home.path())
        .arg("collections")
        .assert()
        .code(5)
        .stderr(predicate::str::contains("config.toml"));
    Ok(())
}
