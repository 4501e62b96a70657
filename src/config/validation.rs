//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Parse the origin map so a malformed one is rejected before install
//! - Validate addresses and log directives
//! - Detect rules that can never match or never substitute
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Rule lints are warnings: a shadowed rule is legal, just suspicious

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::schema::OriginMapConfig;
use crate::origin::{parse, ParseError, Rule, RuleSet};

/// A semantic configuration error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid origin_map: {0}")]
    OriginMap(#[from] ParseError),

    #[error("invalid metrics_address {0:?}")]
    MetricsAddress(String),

    #[error("invalid log_level {0:?}")]
    LogLevel(String),
}

/// Validate a deserialized configuration.
pub fn validate_config(config: &OriginMapConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(e) = parse(&config.origin_map, 1) {
        errors.push(ValidationError::OriginMap(e));
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(obs.metrics_address.clone()));
    }

    if EnvFilter::try_new(&obs.log_level).is_err() {
        errors.push(ValidationError::LogLevel(obs.log_level.clone()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// A non-fatal finding about a parsed RuleSet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleWarning {
    /// Template has no placeholder; every match resolves to the same URL.
    NoPlaceholder { rule: Rule },
    /// Template has more than one placeholder; only the first is substituted.
    ExtraPlaceholders { rule: Rule, count: usize },
    /// An earlier rule's prefix covers this one, so it never matches.
    Shadowed { rule: Rule, by: Rule },
}

impl std::fmt::Display for RuleWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RuleWarning::NoPlaceholder { rule } => {
                write!(f, "rule {} has no placeholder", rule)
            }
            RuleWarning::ExtraPlaceholders { rule, count } => {
                write!(
                    f,
                    "rule {} has {} placeholders, only the first is used",
                    rule, count
                )
            }
            RuleWarning::Shadowed { rule, by } => {
                write!(f, "rule {} is shadowed by earlier rule {}", rule, by)
            }
        }
    }
}

/// Report suspicious rules. Order of warnings follows rule order.
pub fn lint_rules(rules: &RuleSet) -> Vec<RuleWarning> {
    let mut warnings = Vec::new();

    for (i, rule) in rules.iter().enumerate() {
        match rule.placeholder_count() {
            0 => warnings.push(RuleWarning::NoPlaceholder { rule: rule.clone() }),
            1 => {}
            count => warnings.push(RuleWarning::ExtraPlaceholders {
                rule: rule.clone(),
                count,
            }),
        }

        let shadowed_by = rules
            .iter()
            .take(i)
            .find(|earlier| rule.prefix.starts_with(&earlier.prefix));
        if let Some(by) = shadowed_by {
            warnings.push(RuleWarning::Shadowed {
                rule: rule.clone(),
                by: by.clone(),
            });
        }
    }

    warnings
}
