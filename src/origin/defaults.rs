//! Built-in fallback rules for well-known hosts.

use crate::origin::rule::{Rule, RuleSet};

/// Default `(prefix, template)` pairs, in evaluation order.
pub const DEFAULT_RULES: &[(&str, &str)] = &[
    ("github.com/", "https://github.com/%.git"),
    ("bitbucket.org/", "https://bitbucket.org/%.git"),
];

/// The built-in rules on their own.
pub fn default_rules() -> RuleSet {
    DEFAULT_RULES
        .iter()
        .map(|(prefix, template)| Rule::new(*prefix, *template))
        .collect()
}

/// Append each default whose prefix is not already configured.
///
/// Defaults always land after configured rules.
pub fn with_defaults(mut rules: RuleSet) -> RuleSet {
    for (prefix, template) in DEFAULT_RULES {
        if !rules.has_prefix(prefix) {
            rules.push(Rule::new(*prefix, *template));
        }
    }
    rules
}
