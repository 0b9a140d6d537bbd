mod common;

use common::{add_archive, cmdshelf_cmd};
use predicates::prelude::*;
use serde_json::Value;
use tempfile::tempdir;

fn list_json(home: &std::path::Path, collection: Option<&str>) -> anyhow::Result<Vec<Value>> {
    let mut cmd = cmdshelf_cmd(home);
    cmd.args(["list", "--format", "json"]);
    if let Some(name) = collection {
        cmd.args(["-c", name]);
    }
    let out = cmd.assert().success().get_output().stdout.clone();
    let v: Value = serde_json::from_slice(&out)?;
    Ok(v.as_array().cloned().unwrap_or_default())
}

#[test]
fn list_is_empty_on_fresh_home() -> anyhow::Result<()> {
    let home = tempdir()?;

    assert!(list_json(home.path(), None)?.is_empty());
    Ok(())
}

#[test]
fn add_then_list_json() -> anyhow::Result<()> {
    let home = tempdir()?;
    add_archive(home.path());

    let arr = list_json(home.path(), None)?;
    assert_eq!(arr.len(), 1);

    let cmd = &arr[0];
    assert_eq!(cmd["collection"], "default");
    assert_eq!(cmd["name"], "Archive Dir");
    assert_eq!(cmd["description"], "Create a tarball");
    assert_eq!(cmd["command"], "tar -c {?-C {{dir}} ?}-f {{out}} .");
    assert_eq!(cmd["tags"], serde_json::json!(["tar", "backup"]));
    assert_eq!(cmd["parameters"][0]["name"], "dir");
    assert_eq!(cmd["parameters"][0]["optional"], true);
    assert_eq!(cmd["parameters"][1]["defaultValue"], "out.tar");
    Ok(())
}

#[test]
fn add_same_slug_replaces() -> anyhow::Result<()> {
    let home = tempdir()?;
    add_archive(home.path());

    cmdshelf_cmd(home.path())
        .args(["add", "--name", "archive dir", "--command", "tar -cf out.tar ."])
        .assert()
        .success();

    let arr = list_json(home.path(), None)?;
    assert_eq!(arr.len(), 1);
    assert_eq!(arr[0]["command"], "tar -cf out.tar .");
    Ok(())
}

#[test]
fn add_into_new_collection_creates_it() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args([
            "add",
            "-c",
            "net",
            "--name",
            "Ping",
            "--command",
            "ping -c 1 {{host}}",
            "--param",
            "host",
        ])
        .assert()
        .success();

    cmdshelf_cmd(home.path())
        .args(["list", "-c", "net"])
        .assert()
        .success()
        .stdout(predicate::str::contains("net: Ping"));
    assert!(list_json(home.path(), None)?.is_empty());
    Ok(())
}

#[test]
fn add_warns_about_undeclared_placeholder() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["add", "--name", "Ssh", "--command", "ssh {{host}}"])
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stderr(predicate::str::contains("{{host}}"));
    Ok(())
}

#[test]
fn add_without_command_is_usage_error_when_not_interactive() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["add", "--name", "Nothing"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--command"));
    assert!(list_json(home.path(), None)?.is_empty());
    Ok(())
}

#[test]
fn usage_error_message_is_printed_once() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["add", "--command", "ls"])
        .assert()
        .code(2)
        .stderr("error: --name is required when not running interactively\n");
    Ok(())
}

#[test]
fn add_with_nested_block_is_rejected() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["add", "--name", "Bad", "--command", "x {?a {?b?} ?}"])
        .assert()
        .code(4);
    assert!(list_json(home.path(), None)?.is_empty());
    Ok(())
}

#[test]
fn search_prints_matches_when_not_interactive() -> anyhow::Result<()> {
    let home = tempdir()?;
    add_archive(home.path());
    cmdshelf_cmd(home.path())
        .args(["add", "-c", "net", "--name", "Ping", "--command", "ping localhost"])
        .assert()
        .success();

    // Given: commands in two collections
    // When: searching by tag in upper case
    // Then: only the tagged command is printed
    cmdshelf_cmd(home.path())
        .args(["search", "BACKUP"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive Dir"))
        .stdout(predicate::str::contains("Ping").not());

    // An empty term matches everything across collections
    let out = cmdshelf_cmd(home.path())
        .args(["search", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v.as_array().map(Vec::len), Some(2));

    // Collection names are searchable
    let out = cmdshelf_cmd(home.path())
        .args(["search", "net", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out)?;
    assert_eq!(v[0]["name"], "Ping");
    Ok(())
}

#[test]
fn search_restricted_to_collection() -> anyhow::Result<()> {
    let home = tempdir()?;
    add_archive(home.path());

    cmdshelf_cmd(home.path())
        .args(["create-collection", "net"])
        .assert()
        .success();

    cmdshelf_cmd(home.path())
        .args(["search", "tar", "-c", "net"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No commands found."));
    Ok(())
}

#[test]
fn unreadable_collection_is_reported_once() -> anyhow::Result<()> {
    let home = tempdir()?;
    add_archive(home.path());
    std::fs::write(home.path().join("collections/bad.toml"), "commands = [[[")?;

    // Given: One corrupt collection next to a readable one
    // When: Searching across every collection
    let assert = cmdshelf_cmd(home.path())
        .args(["search", "archive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Archive Dir"));

    // Then: The parse failure appears in exactly one diagnostic
    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).into_owned();
    assert_eq!(stderr.matches("Failed to parse").count(), 1, "stderr: {stderr}");
    assert_eq!(
        stderr.matches("Skipping unreadable collection").count(),
        1,
        "stderr: {stderr}"
    );
    Ok(())
}

#[test]
fn search_unknown_collection_exits_not_found() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .args(["search", "x", "-c", "nope"])
        .assert()
        .code(3);
    Ok(())
}

#[test]
fn bare_invocation_requires_terminal() -> anyhow::Result<()> {
    let home = tempdir()?;

    cmdshelf_cmd(home.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cmdshelf search"))
        .stderr(predicate::str::contains("not running in a terminal").count(1));
    Ok(())
}
