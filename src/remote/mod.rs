//! Remote URL canonicalization.
//!
//! # Data Flow
//! ```text
//! remote URL (as configured in a git client)
//!     → strip scheme, user-info, port
//!     → strip trailing .git
//!     → Return: host/path repo URI
//! ```
//!
//! # Design Decisions
//! - Total function: best guess for display and naming, never an error
//! - `host:<digits>/` is a port, `host:<anything else>` starts an SCP path
//! - Case is preserved; hosts are not lowercased

pub mod canonicalize;

pub use canonicalize::canonicalize;
