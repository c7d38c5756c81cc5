//! Credential resolution chain
//!
//! Sources are tried in a fixed order and the first one that yields a value
//! wins. Lower-priority sources are not consulted once a value is found.
//!
//! 1. Explicit token passed by the caller
//! 2. `gh auth token`
//! 3. `GITHUB_TOKEN`, `GITHUB_PERSONAL_ACCESS_TOKEN`, `GH_TOKEN`
//! 4. `~/.config/gh/hosts.yml`, `~/.github_token`, `~/.config/github/token`

use super::hosts_config::{self, DEFAULT_HOST};
use super::token_manager::{ConfigFormat, CredentialSource, ResolvedCredential, SecureTokenManager};
use crate::core::error::WrapperError;
use crate::core::host::HostEnvironment;
use std::path::Path;
use tracing::{debug, info};

/// Credential files relative to the home directory, highest priority first
const CREDENTIAL_FILES: &[(&str, ConfigFormat)] = &[
    (".config/gh/hosts.yml", ConfigFormat::HostsYaml),
    (".github_token", ConfigFormat::PlainText),
    (".config/github/token", ConfigFormat::PlainText),
];

/// Resolves a GitHub token from the first source that has one
pub struct CredentialResolver<'a> {
    host: &'a dyn HostEnvironment,
    tokens: SecureTokenManager,
}

impl<'a> CredentialResolver<'a> {
    pub fn new(host: &'a dyn HostEnvironment) -> Self {
        Self {
            host,
            tokens: SecureTokenManager::new(),
        }
    }

    /// Run the resolution chain.
    ///
    /// # Errors
    ///
    /// Returns `WrapperError::CredentialNotFound` if no source yields a value.
    pub async fn resolve(
        &self,
        explicit: Option<&str>,
    ) -> Result<ResolvedCredential, WrapperError> {
        let resolved = match explicit.map(str::trim).filter(|t| !t.is_empty()) {
            Some(token) => Some(ResolvedCredential::new(token, CredentialSource::Explicit)),
            None => self.resolve_implicit().await,
        };

        match resolved {
            Some(credential) => {
                info!(
                    source = %credential.source,
                    token = %self.tokens.mask_secret(&credential.token),
                    "Using GitHub token"
                );
                Ok(credential)
            }
            None => Err(WrapperError::CredentialNotFound),
        }
    }

    async fn resolve_implicit(&self) -> Option<ResolvedCredential> {
        if let Some(credential) = self.from_cli_helper().await {
            return Some(credential);
        }
        if let Some(credential) = self.tokens.token_from_env(self.host) {
            return Some(credential);
        }
        self.from_files().await
    }

    /// `gh auth token`; a literal "null" is gh's way of saying "no token"
    async fn from_cli_helper(&self) -> Option<ResolvedCredential> {
        let output = self.host.run_helper("gh", &["auth", "token"]).await?;
        let token = output.trim();
        if token.is_empty() || token == "null" {
            debug!("gh auth token returned no token");
            return None;
        }
        Some(ResolvedCredential::new(token, CredentialSource::CliHelper))
    }

    async fn from_files(&self) -> Option<ResolvedCredential> {
        let Some(home) = self.host.home_dir() else {
            debug!("No home directory, skipping credential files");
            return None;
        };

        for (relative, format) in CREDENTIAL_FILES {
            let path = home.join(relative);
            if let Some(token) = self.read_credential_file(&path, *format).await {
                return Some(ResolvedCredential::new(
                    token,
                    CredentialSource::ConfigFile(path, *format),
                ));
            }
        }

        None
    }

    /// Read one credential file. Missing, unreadable, and empty files all
    /// yield `None` so the scan can continue.
    async fn read_credential_file(&self, path: &Path, format: ConfigFormat) -> Option<String> {
        if !self.host.path_exists(path) {
            return None;
        }

        let content = match self.host.read_file(path).await {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "Skipping unreadable credential file");
                return None;
            }
        };

        let token = match format {
            ConfigFormat::HostsYaml => hosts_config::extract_oauth_token(&content, DEFAULT_HOST),
            ConfigFormat::PlainText => Some(content.trim().to_string()).filter(|t| !t.is_empty()),
        };

        if token.is_none() {
            debug!(path = %path.display(), "Credential file has no token");
        }
        token
    }
}
