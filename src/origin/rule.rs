//! Rewrite rules and ordered rule sets.
//!
//! # Responsibilities
//! - Match a repo URI against a literal prefix (case-sensitive)
//! - Substitute the unmatched suffix into an origin template
//! - Preserve configuration order for first-match lookup

use std::fmt;

use serde::{Deserialize, Serialize};

/// Marker in an origin template replaced by the repo URI suffix.
pub const PLACEHOLDER: char = '%';

/// Separator between prefix and template in the configuration syntax.
pub const SEPARATOR: char = '!';

/// A single `prefix!template` rewrite rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// Literal prefix a repo URI must start with.
    pub prefix: String,

    /// Origin URL template containing the placeholder.
    pub template: String,
}

impl Rule {
    pub fn new(prefix: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            template: template.into(),
        }
    }

    /// Returns true if `repo_uri` starts with this rule's prefix.
    pub fn matches(&self, repo_uri: &str) -> bool {
        repo_uri.starts_with(&self.prefix)
    }

    /// Rewrites `repo_uri` into an origin URL, or `None` if the prefix does not match.
    ///
    /// Only the first placeholder is substituted. A template without one is
    /// returned verbatim.
    pub fn apply(&self, repo_uri: &str) -> Option<String> {
        let suffix = repo_uri.strip_prefix(self.prefix.as_str())?;
        Some(self.template.replacen(PLACEHOLDER, suffix, 1))
    }

    /// Number of placeholders in the template.
    pub fn placeholder_count(&self) -> usize {
        self.template.matches(PLACEHOLDER).count()
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, SEPARATOR, self.template)
    }
}

/// Ordered collection of rules. Order is evaluation priority.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            rules: Vec::with_capacity(capacity),
        }
    }

    /// Appends a rule after every existing rule.
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns true if some rule has exactly this prefix.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.rules.iter().any(|r| r.prefix == prefix)
    }

    /// First rule in order whose prefix matches `repo_uri`.
    pub fn find(&self, repo_uri: &str) -> Option<&Rule> {
        self.rules.iter().find(|r| r.matches(repo_uri))
    }

    /// Resolves `repo_uri` with the first matching rule.
    pub fn resolve(&self, repo_uri: &str) -> Option<String> {
        self.find(repo_uri).and_then(|r| r.apply(repo_uri))
    }
}

impl From<Vec<Rule>> for RuleSet {
    fn from(rules: Vec<Rule>) -> Self {
        Self { rules }
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, rule) in self.rules.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", rule)?;
        }
        Ok(())
    }
}
