//! Secure token handling with masking capabilities
//!
//! Credentials live in [`SecretString`] from the moment they are read until
//! they are handed to the HTTP client or the child environment. Anything that
//! reaches a log goes through [`SecureTokenManager::mask_token`] first.

use crate::core::host::HostEnvironment;
use secrecy::{ExposeSecret, SecretString};
use std::fmt;
use std::path::PathBuf;

/// Environment variables checked for a token, highest priority first
pub const TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GITHUB_PERSONAL_ACCESS_TOKEN", "GH_TOKEN"];

/// Environment variables the token is exported under for the server
pub const CHILD_TOKEN_ENV_VARS: &[&str] = &["GITHUB_TOKEN", "GITHUB_PERSONAL_ACCESS_TOKEN"];

/// On-disk format of a credential file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// GitHub CLI `hosts.yml`
    HostsYaml,
    /// Whole file is the token
    PlainText,
}

/// Where a credential came from. Used for logging only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    Explicit,
    CliHelper,
    EnvironmentVariable(String),
    ConfigFile(PathBuf, ConfigFormat),
}

impl fmt::Display for CredentialSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Explicit => write!(f, "--token flag"),
            Self::CliHelper => write!(f, "gh auth token"),
            Self::EnvironmentVariable(name) => write!(f, "${name}"),
            Self::ConfigFile(path, _) => write!(f, "{}", path.display()),
        }
    }
}

/// A credential together with its provenance
#[derive(Debug)]
pub struct ResolvedCredential {
    pub token: SecretString,
    pub source: CredentialSource,
}

impl ResolvedCredential {
    pub fn new(token: impl Into<String>, source: CredentialSource) -> Self {
        let token: String = token.into();
        Self {
            token: SecretString::new(token.into_boxed_str()),
            source,
        }
    }
}

/// Secure token manager for GitHub authentication
///
/// # Examples
///
/// ```
/// use github_mcp_wrapper::SecureTokenManager;
///
/// let manager = SecureTokenManager::new();
/// assert_eq!(manager.mask_token("ghp_abcdefghijklmnop"), "ghp...nop");
/// ```
pub struct SecureTokenManager {
    env_names: Vec<&'static str>,
}

impl Default for SecureTokenManager {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureTokenManager {
    pub fn new() -> Self {
        Self {
            env_names: TOKEN_ENV_VARS.to_vec(),
        }
    }

    /// Environment variables consulted, in priority order
    pub fn env_names(&self) -> &[&'static str] {
        &self.env_names
    }

    /// Retrieves the first non-empty token from the environment.
    ///
    /// Stops at the first hit, so lower-priority variables are never read.
    pub fn token_from_env(&self, host: &dyn HostEnvironment) -> Option<ResolvedCredential> {
        self.env_names.iter().find_map(|name| {
            let value = host.env_var(name)?;
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            Some(ResolvedCredential::new(
                value,
                CredentialSource::EnvironmentVariable(name.to_string()),
            ))
        })
    }

    /// Masks a token for safe logging
    ///
    /// Shows only the first 3 and last 3 characters for identification purposes.
    /// Tokens shorter than 10 characters are fully masked as "****".
    pub fn mask_token(&self, token: &str) -> String {
        let chars: Vec<char> = token.chars().collect();
        if chars.len() < 10 {
            return "****".to_string();
        }

        let prefix: String = chars[..3].iter().collect();
        let suffix: String = chars[chars.len() - 3..].iter().collect();
        format!("{}...{}", prefix, suffix)
    }

    /// Masked form of a secret
    pub fn mask_secret(&self, token: &SecretString) -> String {
        self.mask_token(token.expose_secret())
    }
}
