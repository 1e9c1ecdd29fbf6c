//! Command execution utilities
//!
//! Provides helper functions for executing external commands with consistent
//! error handling and output capture. Commands run on `tokio::process` and are
//! awaited to completion; there is no timeout.

use std::ffi::OsStr;
use tokio::process::Command;
use tracing::debug;

/// Result of a command execution
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code of the command (-1 when terminated by a signal)
    pub exit_code: i32,
    /// Standard output (stdout)
    pub stdout: String,
    /// Standard error (stderr)
    pub stderr: String,
}

impl CommandResult {
    /// Check if the command succeeded (exit code 0)
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Execute a command and capture its output
///
/// # Arguments
/// * `program` - The program to execute
/// * `args` - Arguments to pass to the program
///
/// # Returns
/// * `Ok(CommandResult)` - The command result with exit code, stdout, and stderr
/// * `Err(std::io::Error)` - If the command failed to start
pub async fn execute_command<P: AsRef<OsStr>>(
    program: P,
    args: &[&str],
) -> std::io::Result<CommandResult> {
    let mut cmd = Command::new(program.as_ref());
    cmd.args(args).kill_on_drop(true);

    debug!(program = ?program.as_ref(), ?args, "spawning command");
    let output = cmd.output().await?;

    Ok(CommandResult {
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}
