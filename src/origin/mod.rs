//! Origin map subsystem.
//!
//! # Data Flow
//! ```text
//! origin map text ("prefix!template prefix!template ...")
//!     → parser.rs (tokenize, split on first '!')
//!     → RuleSet (ordered, textual order preserved)
//!     → defaults.rs (append well-known hosts not configured)
//!     → resolver.rs (atomic swap into active RuleSet)
//!
//! Lookup:
//!     repo URI
//!     → resolver.rs (first rule whose prefix matches)
//!     → rule.rs (substitute suffix into template)
//!     → Return: origin URL or no mapping
//! ```
//!
//! # Design Decisions
//! - First match wins, no longest-prefix tie-break
//! - Plain string prefix test, not path-segment aware
//! - Defaults are appended, never prepended
//! - Active RuleSet is swapped whole; lookups never take a lock

pub mod defaults;
pub mod parser;
pub mod resolver;
pub mod rule;

pub use parser::{parse, ParseError};
pub use resolver::OriginResolver;
pub use rule::{Rule, RuleSet, PLACEHOLDER};
