//! Running expanded command lines through the user's shell.
//!
//! The line is handed to the shell verbatim (`$SHELL -c <line>`, or
//! `cmd /C <line>` on Windows) with stdin, stdout and stderr inherited, so
//! interactive programs behave as if typed at the prompt.

use std::io;
use std::process::{ExitStatus, Stdio};
use tokio::process::Command;
use tokio::task::JoinHandle;
use tracing::debug;

/// The shell used to run command lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    flag: &'static str,
}

impl Shell {
    /// `cmd /C` on Windows, otherwise `$SHELL -c` falling back to `sh`.
    #[must_use]
    pub fn detect() -> Self {
        if cfg!(windows) {
            return Self {
                program: "cmd".to_string(),
                flag: "/C",
            };
        }

        let program = std::env::var("SHELL")
            .ok()
            .filter(|shell| !shell.trim().is_empty())
            .unwrap_or_else(|| "sh".to_string());
        Self { program, flag: "-c" }
    }

    /// Shell executable name or path
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Start `line` and return a task that resolves when it exits.
    ///
    /// The caller must await the handle before the process exits.
    ///
    /// # Errors
    ///
    /// Returns an error if the shell cannot be started.
    pub fn spawn(&self, line: &str) -> io::Result<JoinHandle<io::Result<ExitStatus>>> {
        let mut child = Command::new(&self.program)
            .arg(self.flag)
            .arg(line)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()?;

        debug!(shell = %self.program, pid = ?child.id(), "Spawned command");
        Ok(tokio::spawn(async move { child.wait().await }))
    }
}

/// Exit code to report for a finished child.
///
/// Signals map to `128 + signal` like POSIX shells do.
#[must_use]
pub fn exit_code_for(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code.rem_euclid(256)).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}
