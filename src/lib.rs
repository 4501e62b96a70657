//! Repository origin mapping.
//!
//! Resolves canonical repo URIs (`github.com/org/name`) to the origin URLs
//! they are fetched from, and derives repo URIs from git remote URLs.
//!
//! ```
//! use origin_map::{canonicalize, OriginResolver};
//!
//! let resolver = OriginResolver::empty();
//! resolver.load_str("local/!file:///srv/git/%", true).unwrap();
//!
//! assert_eq!(resolver.resolve("local/tools").as_deref(), Some("file:///srv/git/tools"));
//! assert_eq!(
//!     resolver.resolve("github.com/org/name").as_deref(),
//!     Some("https://github.com/org/name.git")
//! );
//! assert_eq!(canonicalize("git@github.com:org/name.git"), "github.com/org/name");
//! ```

pub mod config;
pub mod observability;
pub mod origin;
pub mod remote;

pub use config::schema::OriginMapConfig;
pub use origin::{parse, OriginResolver, ParseError, Rule, RuleSet};
pub use remote::canonicalize;
