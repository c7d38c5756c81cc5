//! Configuration loader for github-mcp-wrapper
//!
//! Settings are layered and merged with priority (high to low):
//! 1. CLI arguments
//! 2. Environment variables
//! 3. Default values

use super::config::*;
use crate::core::error::WrapperError;
use secrecy::SecretString;
use std::collections::HashMap;
use tracing::warn;

/// Server path override
pub const SERVER_PATH_ENV_VAR: &str = "GITHUB_MCP_SERVER_PATH";

/// Default port override
pub const PORT_ENV_VAR: &str = "GITHUB_MCP_PORT";

/// Log level for both the wrapper and the server
pub const LOG_LEVEL_ENV_VAR: &str = "LOG_LEVEL";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Build the configuration for this invocation
    ///
    /// # Errors
    ///
    /// Returns `WrapperError::Config` for an unparsable port or unknown log level.
    pub fn load(
        cli: CliOptions,
        env: &HashMap<String, String>,
    ) -> Result<WrapperConfig, WrapperError> {
        let layers = vec![Self::load_env_layer(env)?, cli.settings];
        let merged = Self::merge_layers(layers);

        let log_level = match merged.log_level {
            Some(level) => Self::validate_log_level(&level)?,
            None => DEFAULT_LOG_LEVEL.to_string(),
        };

        let port = merged.port.unwrap_or(DEFAULT_PORT);
        if port == 0 {
            return Err(WrapperError::Config {
                message: "port must be between 1 and 65535".to_string(),
            });
        }

        Ok(WrapperConfig {
            token: merged
                .token
                .map(|token| SecretString::new(token.into_boxed_str())),
            server_path: merged.server_path,
            port,
            log_level,
            validate_only: cli.validate_only,
            extra_args: cli.extra_args,
            ..WrapperConfig::default()
        })
    }

    /// Settings taken from environment variables
    fn load_env_layer(env: &HashMap<String, String>) -> Result<ConfigLayer, WrapperError> {
        let mut layer = ConfigLayer::default();

        if let Some(path) = non_empty(env, SERVER_PATH_ENV_VAR) {
            layer.server_path = Some(path.into());
        }

        if let Some(port) = non_empty(env, PORT_ENV_VAR) {
            let parsed = port.parse::<u16>().map_err(|_| WrapperError::Config {
                message: format!("{PORT_ENV_VAR} must be a port number, got '{port}'"),
            })?;
            layer.port = Some(parsed);
        }

        if let Some(level) = non_empty(env, LOG_LEVEL_ENV_VAR) {
            layer.log_level = Some(level.to_string());
        }

        Ok(layer)
    }

    /// Merge layers; later layers win
    fn merge_layers(layers: Vec<ConfigLayer>) -> ConfigLayer {
        let mut result = ConfigLayer::default();

        for layer in layers {
            Self::merge_into(&mut result, layer);
        }

        result
    }

    fn merge_into(target: &mut ConfigLayer, source: ConfigLayer) {
        if source.token.is_some() {
            target.token = source.token;
        }
        if source.server_path.is_some() {
            target.server_path = source.server_path;
        }
        if source.port.is_some() {
            target.port = source.port;
        }
        if source.log_level.is_some() {
            target.log_level = source.log_level;
        }
    }

    fn validate_log_level(level: &str) -> Result<String, WrapperError> {
        let normalized = level.trim().to_ascii_lowercase();
        // common aliases used by Node-based servers
        let normalized = match normalized.as_str() {
            "warning" => "warn".to_string(),
            "fatal" => "error".to_string(),
            _ => normalized,
        };

        if LOG_LEVELS.contains(&normalized.as_str()) {
            return Ok(normalized);
        }

        warn!(log_level = level, "Unknown log level");
        Err(WrapperError::Config {
            message: format!(
                "unknown log level '{level}', expected one of: {}",
                LOG_LEVELS.join(", ")
            ),
        })
    }
}

fn non_empty<'a>(env: &'a HashMap<String, String>, name: &str) -> Option<&'a str> {
    env.get(name)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
}
