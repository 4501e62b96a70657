//! Origin lookup against the active RuleSet.
//!
//! # Responsibilities
//! - Hold the active RuleSet for the process
//! - Resolve repo URIs to origin URLs (first match wins)
//! - Replace the active RuleSet on reload
//!
//! # Design Decisions
//! - `ArcSwap` holds the RuleSet: lookups load a snapshot without locking,
//!   reloads store a fully built replacement in one step
//! - No match is `None`, never an error
//! - A failed parse never touches the active RuleSet

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::OriginMapConfig;
use crate::observability::metrics;
use crate::origin::defaults::with_defaults;
use crate::origin::parser::{parse, ParseError};
use crate::origin::rule::RuleSet;

/// Resolves repo URIs to origin URLs using a swappable RuleSet.
#[derive(Debug)]
pub struct OriginResolver {
    rules: ArcSwap<RuleSet>,
}

impl OriginResolver {
    /// Create a resolver with `rules` active as given (no defaults added).
    pub fn new(rules: RuleSet) -> Self {
        metrics::record_rule_count(rules.len());
        Self {
            rules: ArcSwap::from_pointee(rules),
        }
    }

    /// Create a resolver with no rules; every lookup misses.
    pub fn empty() -> Self {
        Self::new(RuleSet::new())
    }

    /// Build a resolver from a loaded configuration.
    pub fn from_config(config: &OriginMapConfig) -> Result<Self, ParseError> {
        Ok(Self::new(rules_from_config(config)?))
    }

    /// Resolve `repo_uri` to its origin URL, or `None` if no rule matches.
    pub fn resolve(&self, repo_uri: &str) -> Option<String> {
        let origin = self.rules.load().resolve(repo_uri);
        metrics::record_lookup(origin.is_some());

        match &origin {
            Some(url) => tracing::trace!(repo = %repo_uri, origin = %url, "Resolved origin"),
            None => tracing::debug!(repo = %repo_uri, "No origin mapping"),
        }
        origin
    }

    /// Snapshot of the active RuleSet.
    pub fn rules(&self) -> Arc<RuleSet> {
        self.rules.load_full()
    }

    /// Atomically replace the active RuleSet.
    pub fn replace(&self, rules: RuleSet) {
        let count = rules.len();
        self.rules.store(Arc::new(rules));
        metrics::record_rule_count(count);
        tracing::info!(rules = count, "Origin map installed");
    }

    /// Optionally append the built-in defaults, then replace the active RuleSet.
    pub fn install(&self, rules: RuleSet, defaults: bool) {
        let rules = if defaults { with_defaults(rules) } else { rules };
        self.replace(rules);
    }

    /// Parse `text` and install the result.
    ///
    /// On error the active RuleSet is left as it was.
    pub fn load_str(&self, text: &str, defaults: bool) -> Result<(), ParseError> {
        match parse(text, 1) {
            Ok(rules) => {
                self.install(rules, defaults);
                metrics::record_reload(true);
                Ok(())
            }
            Err(e) => {
                metrics::record_reload(false);
                tracing::error!(error = %e, "Rejected origin map; keeping current rules");
                Err(e)
            }
        }
    }
}

/// The RuleSet a configuration activates: parsed rules, then defaults if enabled.
pub fn rules_from_config(config: &OriginMapConfig) -> Result<RuleSet, ParseError> {
    let rules = parse(&config.origin_map, 1)?;
    if config.defaults {
        Ok(with_defaults(rules))
    } else {
        Ok(rules)
    }
}

impl Default for OriginResolver {
    fn default() -> Self {
        Self::empty()
    }
}
