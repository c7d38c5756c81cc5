//! Error handling for the wrapper pipeline
//!
//! Every failure that can end an invocation is a [`WrapperError`] variant.
//! Each variant carries a stable code and remediation hints so the CLI can
//! report it without a stack trace.

use std::path::PathBuf;
use thiserror::Error;

/// Terminal errors of a wrapper invocation
#[derive(Error, Debug)]
pub enum WrapperError {
    // Credential errors
    #[error("No GitHub token found")]
    CredentialNotFound,

    #[error("GitHub token is too short ({length} characters, expected at least 20)")]
    CredentialTooShort { length: usize },

    #[error("GitHub rejected the token (HTTP {status})")]
    CredentialRejected { status: u16 },

    #[error("Could not reach the GitHub API: {message}")]
    ValidationNetworkError { message: String },

    // Server discovery errors
    #[error("GitHub MCP server not found")]
    ServerNotFound,

    #[error("Server path does not exist: {}", .path.display())]
    ServerPathInvalid { path: PathBuf },

    #[error("Don't know how to launch server candidate: {candidate}")]
    UnsupportedCandidate { candidate: String },

    #[error("{runtime} is required to run {}", .path.display())]
    MissingRuntime { runtime: String, path: PathBuf },

    // Child process errors
    #[error("Failed to start {program}: {message}")]
    ChildSpawnFailure { program: String, message: String },

    #[error("Server was terminated by signal {signal}")]
    ChildSignalTermination { signal: i32 },

    // Configuration errors
    #[error("Invalid configuration: {message}")]
    Config { message: String },
}

impl WrapperError {
    /// Get suggested actions for this error
    pub fn suggested_actions(&self) -> Vec<String> {
        match self {
            Self::CredentialNotFound => vec![
                "Run `gh auth login` to authenticate with the GitHub CLI".to_string(),
                "Set one of the GITHUB_TOKEN, GITHUB_PERSONAL_ACCESS_TOKEN or GH_TOKEN environment variables".to_string(),
                "Pass a token directly with --token <TOKEN>".to_string(),
                "Save a personal access token to ~/.github_token".to_string(),
            ],
            Self::CredentialTooShort { .. } => vec![
                "Check that the full token was copied".to_string(),
                "Create a new token at https://github.com/settings/tokens".to_string(),
            ],
            Self::CredentialRejected { .. } => vec![
                "Check that the token has not expired or been revoked".to_string(),
                "Run `gh auth refresh` or create a new token".to_string(),
            ],
            Self::ValidationNetworkError { .. } => vec![
                "Check your internet connection".to_string(),
                "Check proxy settings (HTTPS_PROXY) if you are behind a proxy".to_string(),
            ],
            Self::ServerNotFound => vec![
                "Install Go so the server can be run with `go run github.com/github/github-mcp-server/cmd/github-mcp-server@latest`".to_string(),
                "Or install the `github-mcp-server` binary and put it on PATH".to_string(),
                "Or point GITHUB_MCP_SERVER_PATH / --server-path at an existing server".to_string(),
            ],
            Self::ServerPathInvalid { .. } => vec![
                "Check the value of --server-path or GITHUB_MCP_SERVER_PATH".to_string(),
                "Unset the override to let the wrapper search for the server".to_string(),
            ],
            Self::UnsupportedCandidate { .. } => vec![
                "Point --server-path at an executable file or a .js entry point".to_string(),
                "Make sure the file has execute permission".to_string(),
            ],
            Self::MissingRuntime { runtime, .. } => vec![
                format!("Install {runtime} and make sure it is on PATH"),
            ],
            Self::ChildSpawnFailure { .. } => vec![
                "Check that the server executable exists and is executable".to_string(),
                "Run with --log-level debug for more detail".to_string(),
            ],
            Self::ChildSignalTermination { .. } => vec![
                "Check the server output above for the cause".to_string(),
            ],
            Self::Config { .. } => vec![
                "Run with --help to see accepted values".to_string(),
            ],
        }
    }

    /// Get error code for this error
    pub fn code(&self) -> &'static str {
        match self {
            Self::CredentialNotFound => "CREDENTIAL_NOT_FOUND",
            Self::CredentialTooShort { .. } => "CREDENTIAL_TOO_SHORT",
            Self::CredentialRejected { .. } => "CREDENTIAL_REJECTED",
            Self::ValidationNetworkError { .. } => "VALIDATION_NETWORK_ERROR",
            Self::ServerNotFound => "SERVER_NOT_FOUND",
            Self::ServerPathInvalid { .. } => "SERVER_PATH_INVALID",
            Self::UnsupportedCandidate { .. } => "UNSUPPORTED_CANDIDATE",
            Self::MissingRuntime { .. } => "MISSING_RUNTIME",
            Self::ChildSpawnFailure { .. } => "CHILD_SPAWN_FAILURE",
            Self::ChildSignalTermination { .. } => "CHILD_SIGNAL_TERMINATION",
            Self::Config { .. } => "CONFIG_ERROR",
        }
    }

    /// Process exit code to use when this error ends the invocation
    pub fn exit_code(&self) -> i32 {
        1
    }
}
