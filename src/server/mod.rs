//! Locating and running the GitHub MCP server
//!
//! The locator decides *what* to run; the supervisor runs it and relays
//! signals until it exits.

pub mod locator;
pub mod supervisor;

pub use locator::{ExecutableCandidate, ExecutableLocator, GO_MODULE, LEGACY_BINARY};
pub use supervisor::{
    ForwardedSignal, LaunchPlan, ProcessSupervisor, SupervisedProcess, spawn_signal_listener,
};
