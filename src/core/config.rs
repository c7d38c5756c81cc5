//! Configuration structures for github-mcp-wrapper
//!
//! A [`WrapperConfig`] is built once per invocation and passed down the
//! pipeline. It is assembled from [`ConfigLayer`]s by
//! [`ConfigLoader`](super::config_loader::ConfigLoader).

use crate::security::credential_validator::{DEFAULT_API_BASE, VALIDATION_TIMEOUT};
use secrecy::SecretString;
use std::path::PathBuf;
use std::time::Duration;

/// Port handed to the server when nothing else is configured
pub const DEFAULT_PORT: u16 = 3000;

/// Log level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Accepted log levels, least to most verbose
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// Timeout for helper commands such as `gh auth token`
pub const HELPER_TIMEOUT: Duration = Duration::from_secs(5);

/// One source of settings. `None` means "not set here".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    pub token: Option<String>,
    pub server_path: Option<PathBuf>,
    pub port: Option<u16>,
    pub log_level: Option<String>,
}

/// Options that only exist on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CliOptions {
    pub settings: ConfigLayer,
    pub validate_only: bool,
    pub extra_args: Vec<String>,
}

/// Fully resolved configuration for one invocation
#[derive(Debug)]
pub struct WrapperConfig {
    /// Token given explicitly on the command line
    pub token: Option<SecretString>,
    /// Server override; must exist when set
    pub server_path: Option<PathBuf>,
    pub port: u16,
    pub log_level: String,
    /// Resolve and validate the token, then exit without launching
    pub validate_only: bool,
    /// Arguments passed verbatim to the server
    pub extra_args: Vec<String>,
    pub api_base: String,
    pub validation_timeout: Duration,
    pub helper_timeout: Duration,
}

impl Default for WrapperConfig {
    fn default() -> Self {
        Self {
            token: None,
            server_path: None,
            port: DEFAULT_PORT,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            validate_only: false,
            extra_args: Vec::new(),
            api_base: DEFAULT_API_BASE.to_string(),
            validation_timeout: VALIDATION_TIMEOUT,
            helper_timeout: HELPER_TIMEOUT,
        }
    }
}
