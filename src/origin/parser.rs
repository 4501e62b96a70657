//! Origin map configuration parsing.
//!
//! # Format
//! ```text
//! prefix!template prefix!template ...
//! ```
//! Tokens are whitespace separated. The first `!` in a token splits the
//! prefix from the template; the template may contain further `!` and `%`.

use thiserror::Error;

use crate::origin::rule::{Rule, RuleSet, SEPARATOR};

/// Errors produced while parsing an origin map.
///
/// `position` is the 1-based ordinal of the offending token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("origin map token {position} {token:?}: missing '!' separator")]
    MissingSeparator { token: String, position: usize },

    #[error("origin map token {position} {token:?}: empty prefix")]
    EmptyPrefix { token: String, position: usize },
}

impl ParseError {
    /// The offending token.
    pub fn token(&self) -> &str {
        match self {
            ParseError::MissingSeparator { token, .. } | ParseError::EmptyPrefix { token, .. } => {
                token
            }
        }
    }

    /// 1-based ordinal of the offending token.
    pub fn position(&self) -> usize {
        match self {
            ParseError::MissingSeparator { position, .. }
            | ParseError::EmptyPrefix { position, .. } => *position,
        }
    }
}

/// Parse origin map text into an ordered RuleSet.
///
/// `expected_rules` only pre-sizes the result. Empty input yields an empty
/// RuleSet. The first malformed token aborts the whole parse.
pub fn parse(text: &str, expected_rules: usize) -> Result<RuleSet, ParseError> {
    let mut rules = RuleSet::with_capacity(expected_rules);

    for (i, token) in text.split_whitespace().enumerate() {
        let position = i + 1;
        let (prefix, template) = token.split_once(SEPARATOR).ok_or_else(|| {
            ParseError::MissingSeparator {
                token: token.to_string(),
                position,
            }
        })?;

        if prefix.is_empty() {
            return Err(ParseError::EmptyPrefix {
                token: token.to_string(),
                position,
            });
        }

        rules.push(Rule::new(prefix, template));
    }

    Ok(rules)
}
