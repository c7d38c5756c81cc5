//! Orchestration layer
//!
//! Ties credential resolution, validation, server discovery and supervision
//! into a single invocation.

pub mod wrapper;

pub use wrapper::{McpWrapper, RunOutcome};
