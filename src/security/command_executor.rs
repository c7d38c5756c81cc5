//! SafeCommandExecutor: whitelisted helper command execution
//!
//! The wrapper shells out to a handful of well-known tools while probing the
//! machine (`gh auth token`, `npm root -g`). Those calls go through this
//! executor, which:
//!
//! - **Whitelists** the program name, so only pre-approved tools can run
//! - **Never interpolates** arguments into a shell string
//! - **Bounds** every call with a timeout and kills the child when it expires
//!
//! # Example
//!
//! ```rust,no_run
//! use github_mcp_wrapper::SafeCommandExecutor;
//! use std::time::Duration;
//!
//! # async fn demo() -> Result<(), github_mcp_wrapper::CommandError> {
//! let executor = SafeCommandExecutor::new(Duration::from_secs(5));
//! let output = executor.execute("gh", &["auth", "token"]).await?;
//! println!("{}", String::from_utf8_lossy(&output.stdout));
//! # Ok(())
//! # }
//! ```

use std::process::{Output, Stdio};
use std::time::Duration;
use thiserror::Error;
use tokio::process::Command;

/// Allowed commands whitelist.
///
/// Only these commands can be executed via SafeCommandExecutor.
const ALLOWED_COMMANDS: &[&str] = &["gh", "go", "npm", "node"];

/// Errors that can occur during command execution
#[derive(Error, Debug)]
pub enum CommandError {
    /// Command is not in the allowed whitelist
    #[error("Command '{0}' is not in the allowed whitelist")]
    CommandNotAllowed(String),

    /// Command execution failed (e.g., binary not found, permission denied)
    #[error("Command execution failed: {0}")]
    ExecutionFailed(String),

    /// Command exceeded the timeout duration
    #[error("Command timeout after {0:?}")]
    Timeout(Duration),
}

/// Safe command executor with a whitelist and a hard timeout
#[derive(Debug, Clone)]
pub struct SafeCommandExecutor {
    timeout: Duration,
}

impl SafeCommandExecutor {
    /// Create an executor whose commands are killed after `timeout`
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Execute a whitelisted command and capture its output.
    ///
    /// stdin is closed so interactive tools cannot block waiting for input.
    ///
    /// # Errors
    ///
    /// - `CommandError::CommandNotAllowed` - Command not in whitelist
    /// - `CommandError::ExecutionFailed` - Binary not found or execution error
    /// - `CommandError::Timeout` - Command ran longer than the configured timeout
    pub async fn execute(&self, command: &str, args: &[&str]) -> Result<Output, CommandError> {
        if !ALLOWED_COMMANDS.contains(&command) {
            return Err(CommandError::CommandNotAllowed(command.to_string()));
        }

        // npm ships as a .cmd shim on Windows
        #[cfg(target_os = "windows")]
        let command_name = if command == "npm" {
            format!("{}.cmd", command)
        } else {
            command.to_string()
        };

        #[cfg(not(target_os = "windows"))]
        let command_name = command.to_string();

        let child = Command::new(&command_name)
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| CommandError::ExecutionFailed(e.to_string()))?;

        match tokio::time::timeout(self.timeout, child.wait_with_output()).await {
            Ok(result) => result.map_err(|e| CommandError::ExecutionFailed(e.to_string())),
            Err(_) => Err(CommandError::Timeout(self.timeout)),
        }
    }

    /// Run a command and return its trimmed stdout if it exited successfully.
    ///
    /// Any failure (not whitelisted, missing binary, non-zero exit, timeout)
    /// collapses to `None`; callers treat helpers as optional probes.
    pub async fn stdout_if_success(&self, command: &str, args: &[&str]) -> Option<String> {
        match self.execute(command, args).await {
            Ok(output) if output.status.success() => {
                Some(String::from_utf8_lossy(&output.stdout).trim().to_string())
            }
            Ok(output) => {
                tracing::debug!(
                    command,
                    status = ?output.status.code(),
                    "helper command exited unsuccessfully"
                );
                None
            }
            Err(e) => {
                tracing::debug!(command, error = %e, "helper command unavailable");
                None
            }
        }
    }
}

impl Default for SafeCommandExecutor {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
