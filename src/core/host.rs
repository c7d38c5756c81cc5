//! Host adapter
//!
//! The pipeline never touches the process environment, filesystem, or `PATH`
//! directly. It goes through [`HostEnvironment`], so the resolution and
//! discovery logic is written once and exercised in tests against an
//! in-memory host.

use crate::security::SafeCommandExecutor;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Operating system family, used for executable naming
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Unix,
    Windows,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Unix
        }
    }

    /// Platform-specific file name for an executable
    pub fn executable_name(&self, name: &str) -> String {
        match self {
            Self::Windows => format!("{name}.exe"),
            Self::Unix => name.to_string(),
        }
    }
}

/// Process primitives the core depends on
#[async_trait]
pub trait HostEnvironment: Send + Sync {
    fn platform(&self) -> Platform;

    /// Value of an environment variable, if set and valid unicode
    fn env_var(&self, name: &str) -> Option<String>;

    /// Snapshot of the whole environment
    fn env_vars(&self) -> HashMap<String, String>;

    fn home_dir(&self) -> Option<PathBuf>;

    fn current_dir(&self) -> Option<PathBuf>;

    fn path_exists(&self, path: &Path) -> bool;

    /// Whether `path` is a file this host can execute directly
    fn is_executable(&self, path: &Path) -> bool;

    /// Locate a program by name on `PATH`
    fn find_in_path(&self, program: &str) -> Option<PathBuf>;

    async fn read_file(&self, path: &Path) -> std::io::Result<String>;

    /// Run a short helper command, returning trimmed stdout on success
    async fn run_helper(&self, program: &str, args: &[&str]) -> Option<String>;
}

/// Host adapter backed by the real operating system
#[derive(Debug, Clone, Default)]
pub struct SystemHost {
    executor: SafeCommandExecutor,
}

impl SystemHost {
    pub fn new(executor: SafeCommandExecutor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl HostEnvironment for SystemHost {
    fn platform(&self) -> Platform {
        Platform::current()
    }

    fn env_var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn env_vars(&self) -> HashMap<String, String> {
        env::vars().collect()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }

    fn path_exists(&self, path: &Path) -> bool {
        path.exists()
    }

    #[cfg(unix)]
    fn is_executable(&self, path: &Path) -> bool {
        use std::os::unix::fs::PermissionsExt;

        std::fs::metadata(path)
            .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false)
    }

    #[cfg(not(unix))]
    fn is_executable(&self, path: &Path) -> bool {
        path.is_file()
    }

    fn find_in_path(&self, program: &str) -> Option<PathBuf> {
        which::which(program).ok()
    }

    async fn read_file(&self, path: &Path) -> std::io::Result<String> {
        tokio::fs::read_to_string(path).await
    }

    async fn run_helper(&self, program: &str, args: &[&str]) -> Option<String> {
        self.executor.stdout_if_success(program, args).await
    }
}
