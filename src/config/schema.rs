//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML.
//!
//! ```toml
//! origin_map = "local/!local/% github.com/!https://github.com/%.git"
//! defaults = true
//!
//! [observability]
//! log_level = "info"
//! log_format = "pretty"
//! ```

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OriginMapConfig {
    /// Origin map rules, `prefix!template` tokens separated by whitespace.
    pub origin_map: String,

    /// Append built-in rules for well-known hosts not configured explicitly.
    pub defaults: bool,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for OriginMapConfig {
    fn default() -> Self {
        Self {
            origin_map: String::new(),
            defaults: true,
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human readable, for development.
    #[default]
    Pretty,
    /// One JSON object per line, for log aggregation.
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
