pub mod core;
pub mod orchestration;
pub mod security;
pub mod server;

pub use crate::core::*;
pub use orchestration::{McpWrapper, RunOutcome};
pub use security::{
    CommandError, CredentialResolver, CredentialSource, CredentialValidator, ResolvedCredential,
    SafeCommandExecutor, SecureTokenManager,
};
pub use server::{ExecutableCandidate, ExecutableLocator, ProcessSupervisor};
