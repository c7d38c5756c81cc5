//! Server executable discovery
//!
//! Probes run from most to least specific and stop at the first hit:
//!
//! 1. Explicit path (`--server-path` / `GITHUB_MCP_SERVER_PATH`)
//! 2. `go run` of the official module, when Go is installed
//! 3. `github-mcp-server` on `PATH`
//! 4. Entry points under `npm root -g`
//! 5. Conventional user-local and project-local install paths

use crate::core::error::WrapperError;
use crate::core::host::HostEnvironment;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Module reference passed to `go run`
pub const GO_MODULE: &str = "github.com/github/github-mcp-server/cmd/github-mcp-server@latest";

/// Name of the standalone server binary
pub const LEGACY_BINARY: &str = "github-mcp-server";

/// Entry points relative to the npm global root
const NPM_ENTRY_POINTS: &[&str] = &[
    "@modelcontextprotocol/server-github/dist/index.js",
    "github-mcp-server/dist/index.js",
];

/// A way of running the server that has not been launched yet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutableCandidate {
    /// Found by searching the machine
    ResolvedPath(PathBuf),
    /// Run through a toolchain that fetches the module on demand
    ManagedRuntimeInvocation(String),
    /// Supplied by the user
    ConfiguredOverride(PathBuf),
}

impl ExecutableCandidate {
    /// Filesystem path, for candidates that have one
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::ResolvedPath(path) | Self::ConfiguredOverride(path) => Some(path),
            Self::ManagedRuntimeInvocation(_) => None,
        }
    }
}

impl fmt::Display for ExecutableCandidate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ResolvedPath(path) | Self::ConfiguredOverride(path) => {
                write!(f, "{}", path.display())
            }
            Self::ManagedRuntimeInvocation(module) => write!(f, "go run {module}"),
        }
    }
}

/// Finds the server to supervise
pub struct ExecutableLocator<'a> {
    host: &'a dyn HostEnvironment,
}

impl<'a> ExecutableLocator<'a> {
    pub fn new(host: &'a dyn HostEnvironment) -> Self {
        Self { host }
    }

    /// Locate the server.
    ///
    /// # Errors
    ///
    /// - `ServerPathInvalid` - `explicit` was given but does not exist
    /// - `ServerNotFound` - every probe came up empty
    pub async fn locate(
        &self,
        explicit: Option<&Path>,
    ) -> Result<ExecutableCandidate, WrapperError> {
        if let Some(path) = explicit {
            if !self.host.path_exists(path) {
                return Err(WrapperError::ServerPathInvalid {
                    path: path.to_path_buf(),
                });
            }
            info!(path = %path.display(), "Using configured server path");
            return Ok(ExecutableCandidate::ConfiguredOverride(path.to_path_buf()));
        }

        if let Some(go) = self.host.find_in_path("go") {
            info!(go = %go.display(), "Go found, server will be run with `go run`");
            return Ok(ExecutableCandidate::ManagedRuntimeInvocation(
                GO_MODULE.to_string(),
            ));
        }

        if let Some(path) = self.host.find_in_path(LEGACY_BINARY) {
            if self.host.path_exists(&path) {
                info!(path = %path.display(), "Found server on PATH");
                return Ok(ExecutableCandidate::ResolvedPath(path));
            }
        }

        for path in self.fallback_paths().await {
            if self.host.path_exists(&path) {
                info!(path = %path.display(), "Found server");
                return Ok(ExecutableCandidate::ResolvedPath(path));
            }
            debug!(path = %path.display(), "Server candidate does not exist");
        }

        Err(WrapperError::ServerNotFound)
    }

    /// npm global entry points followed by conventional install locations
    async fn fallback_paths(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        if let Some(root) = self.host.run_helper("npm", &["root", "-g"]).await {
            if !root.is_empty() {
                let root = PathBuf::from(root);
                paths.extend(NPM_ENTRY_POINTS.iter().map(|entry| root.join(entry)));
            }
        }

        let binary = self.host.platform().executable_name(LEGACY_BINARY);
        if let Some(home) = self.host.home_dir() {
            paths.push(home.join("go").join("bin").join(&binary));
            paths.push(home.join(".local").join("bin").join(&binary));
        }
        if let Some(cwd) = self.host.current_dir() {
            let node_modules = cwd.join("node_modules");
            paths.push(node_modules.join(NPM_ENTRY_POINTS[0]));
            paths.push(node_modules.join(".bin").join(&binary));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::host::Platform;
    use crate::core::host::testing::FakeHost;

    #[tokio::test]
    async fn test_missing_explicit_path_probes_nothing_else() {
        let host = FakeHost::new()
            .with_program("go", "/usr/bin/go")
            .with_program(LEGACY_BINARY, "/usr/bin/github-mcp-server");

        let result = ExecutableLocator::new(&host)
            .locate(Some(Path::new("/opt/missing/server")))
            .await;

        assert!(matches!(
            result,
            Err(WrapperError::ServerPathInvalid { ref path }) if path == Path::new("/opt/missing/server")
        ));
        assert_eq!(host.accesses(), vec!["exists:/opt/missing/server".to_string()]);
    }

    #[tokio::test]
    async fn test_existing_explicit_path_is_override() {
        let host = FakeHost::new()
            .with_executable("/opt/server")
            .with_program("go", "/usr/bin/go");

        let candidate = ExecutableLocator::new(&host)
            .locate(Some(Path::new("/opt/server")))
            .await
            .unwrap();

        assert_eq!(
            candidate,
            ExecutableCandidate::ConfiguredOverride(PathBuf::from("/opt/server"))
        );
        assert_eq!(host.count("which:"), 0);
    }

    #[tokio::test]
    async fn test_go_marker_accepted_without_existence_check() {
        let host = FakeHost::new()
            .with_program("go", "/usr/local/go/bin/go")
            .with_program(LEGACY_BINARY, "/usr/bin/github-mcp-server");

        let candidate = ExecutableLocator::new(&host).locate(None).await.unwrap();

        assert_eq!(
            candidate,
            ExecutableCandidate::ManagedRuntimeInvocation(GO_MODULE.to_string())
        );
        assert_eq!(host.count("exists:"), 0);
        assert_eq!(host.count(&format!("which:{LEGACY_BINARY}")), 0);
    }

    #[tokio::test]
    async fn test_legacy_binary_on_path() {
        let host = FakeHost::new()
            .with_program(LEGACY_BINARY, "/usr/bin/github-mcp-server")
            .with_executable("/usr/bin/github-mcp-server");

        let candidate = ExecutableLocator::new(&host).locate(None).await.unwrap();

        assert_eq!(
            candidate,
            ExecutableCandidate::ResolvedPath(PathBuf::from("/usr/bin/github-mcp-server"))
        );
        assert_eq!(host.count("helper:"), 0);
    }

    #[tokio::test]
    async fn test_npm_global_entry_point() {
        let entry = "/usr/lib/node_modules/github-mcp-server/dist/index.js";
        let host = FakeHost::new()
            .with_helper("npm root -g", "/usr/lib/node_modules\n")
            .with_file(entry, "");

        let candidate = ExecutableLocator::new(&host).locate(None).await.unwrap();

        assert_eq!(candidate, ExecutableCandidate::ResolvedPath(PathBuf::from(entry)));
        assert_eq!(
            host.count("exists:/usr/lib/node_modules/@modelcontextprotocol"),
            1
        );
    }

    #[tokio::test]
    async fn test_conventional_user_path() {
        let path = FakeHost::home(".local/bin/github-mcp-server");
        let host = FakeHost::new().with_executable(path.clone());

        let candidate = ExecutableLocator::new(&host).locate(None).await.unwrap();

        assert_eq!(candidate, ExecutableCandidate::ResolvedPath(path));
    }

    #[tokio::test]
    async fn test_windows_binary_names() {
        let path = FakeHost::home("go/bin/github-mcp-server.exe");
        let mut host = FakeHost::new().with_executable(path.clone());
        host.platform = Some(Platform::Windows);

        let candidate = ExecutableLocator::new(&host).locate(None).await.unwrap();

        assert_eq!(candidate, ExecutableCandidate::ResolvedPath(path));
    }

    #[tokio::test]
    async fn test_nothing_found() {
        let host = FakeHost::new();

        let result = ExecutableLocator::new(&host).locate(None).await;

        assert!(matches!(result, Err(WrapperError::ServerNotFound)));
        assert_eq!(host.count("exists:"), 4);
    }

    #[test]
    fn test_candidate_display() {
        let candidate = ExecutableCandidate::ManagedRuntimeInvocation(GO_MODULE.to_string());
        assert!(candidate.to_string().starts_with("go run github.com/github"));
        assert!(candidate.path().is_none());
    }
}
