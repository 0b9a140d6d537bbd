#![allow(clippy::expect_used, clippy::unwrap_used)]

use assert_cmd::Command;
use std::path::Path;
use std::time::Duration;

#[allow(dead_code)]
pub const CMD_TIMEOUT: Duration = Duration::from_secs(15);

/// Create a `cmdshelf` command rooted at `home` that never prompts.
#[allow(dead_code)]
pub fn cmdshelf_cmd(home: &Path) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("cmdshelf"));
    cmd.timeout(CMD_TIMEOUT);
    cmd.env("CMDSHELF_HOME", home);
    cmd.env("CMDSHELF_NON_INTERACTIVE", "1");
    cmd.env("NO_COLOR", "1");
    cmd
}

/// Save the sample archive command into `home`'s default collection.
#[allow(dead_code)]
pub fn add_archive(home: &Path) {
    cmdshelf_cmd(home)
        .args([
            "add",
            "--name",
            "Archive Dir",
            "--command",
            "tar -c {?-C {{dir}} ?}-f {{out}} .",
            "--description",
            "Create a tarball",
            "--tag",
            "tar,backup",
            "--param",
            "dir?:Directory to archive",
            "--param",
            "out:Output file=out.tar",
        ])
        .assert()
        .success();
}
