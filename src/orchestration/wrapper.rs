//! Wrapper pipeline
//!
//! Resolve a token, then either validate it (validate-only mode) or locate
//! the server and supervise it. Each stage short-circuits on failure; no
//! stage is retried.

use crate::core::config::WrapperConfig;
use crate::core::error::WrapperError;
use crate::core::host::HostEnvironment;
use crate::security::{CredentialResolver, CredentialSource, CredentialValidator};
use crate::server::{ExecutableLocator, ProcessSupervisor};
use secrecy::ExposeSecret;
use tracing::info;

/// How a successful invocation ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Validate-only mode: the token belongs to `login`
    Validated {
        login: String,
        source: CredentialSource,
    },
    /// The server ran and exited with `code`
    ServerExited { code: i32 },
}

impl RunOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validated { .. } => 0,
            Self::ServerExited { code } => *code,
        }
    }
}

/// One invocation of the wrapper
pub struct McpWrapper<'a> {
    host: &'a dyn HostEnvironment,
    config: &'a WrapperConfig,
}

impl<'a> McpWrapper<'a> {
    pub fn new(host: &'a dyn HostEnvironment, config: &'a WrapperConfig) -> Self {
        Self { host, config }
    }

    /// Run the full pipeline
    pub async fn run(&self) -> Result<RunOutcome, WrapperError> {
        let explicit = self.config.token.as_ref().map(|t| t.expose_secret());
        let credential = CredentialResolver::new(self.host).resolve(explicit).await?;

        if self.config.validate_only {
            let validator =
                CredentialValidator::new(&self.config.api_base, self.config.validation_timeout)?;
            let login = validator.validate(&credential.token).await?;
            info!(%login, source = %credential.source, "Token is valid");
            return Ok(RunOutcome::Validated {
                login,
                source: credential.source,
            });
        }

        let candidate = ExecutableLocator::new(self.host)
            .locate(self.config.server_path.as_deref())
            .await?;

        let code = ProcessSupervisor::new(self.host, self.config.log_level.as_str())
            .launch(
                &credential.token,
                &candidate,
                self.config.port,
                &self.config.extra_args,
            )
            .await?;

        Ok(RunOutcome::ServerExited { code })
    }
}
