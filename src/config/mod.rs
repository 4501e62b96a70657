//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML) + ORIGIN_MAP env
//!     → loader.rs (parse, deserialize, env override)
//!     → validation.rs (semantic checks, origin map must parse)
//!     → OriginMapConfig (validated, immutable)
//!     → OriginResolver::from_config
//!
//! On file change:
//!     watcher.rs detects change
//!     → loader.rs loads new config
//!     → validation.rs validates
//!     → atomic swap of the resolver's RuleSet
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full reload
//! - All fields have defaults to allow minimal configs
//! - A config that fails validation never reaches the resolver

pub mod loader;
pub mod schema;
pub mod validation;
pub mod watcher;

pub use loader::{load_config, load_config_str, load_default, ConfigError};
pub use schema::{LogFormat, ObservabilityConfig, OriginMapConfig};
pub use validation::{lint_rules, validate_config, RuleWarning, ValidationError};
pub use watcher::ConfigWatcher;
