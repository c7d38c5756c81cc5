pub mod config;
pub mod config_loader;
pub mod error;
pub mod host;

pub use config::*;
pub use config_loader::*;
pub use error::*;
pub use host::{HostEnvironment, Platform, SystemHost};
