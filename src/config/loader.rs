//! Configuration loading from disk and environment.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::OriginMapConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable that replaces `origin_map` when set.
pub const ORIGIN_MAP_ENV: &str = "ORIGIN_MAP";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<OriginMapConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    load_config_str(&content)
}

/// Load and validate configuration from TOML text.
pub fn load_config_str(content: &str) -> Result<OriginMapConfig, ConfigError> {
    let config: OriginMapConfig = toml::from_str(content)?;
    finish(config)
}

/// Configuration with no file: defaults plus environment override.
pub fn load_default() -> Result<OriginMapConfig, ConfigError> {
    finish(OriginMapConfig::default())
}

fn finish(config: OriginMapConfig) -> Result<OriginMapConfig, ConfigError> {
    let config = apply_env_override(config, std::env::var(ORIGIN_MAP_ENV).ok());
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Replace `origin_map` with `value` when the override is present.
pub fn apply_env_override(mut config: OriginMapConfig, value: Option<String>) -> OriginMapConfig {
    if let Some(origin_map) = value {
        tracing::debug!(env = ORIGIN_MAP_ENV, "Origin map taken from environment");
        config.origin_map = origin_map;
    }
    config
}
