pub mod command_executor;
pub mod credential_resolver;
pub mod credential_validator;
pub mod hosts_config;
pub mod token_manager;

pub use command_executor::{CommandError, SafeCommandExecutor};
pub use credential_resolver::CredentialResolver;
pub use credential_validator::CredentialValidator;
pub use token_manager::{
    ConfigFormat, CredentialSource, ResolvedCredential, SecureTokenManager, TOKEN_ENV_VARS,
};
