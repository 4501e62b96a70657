//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! origin, config subsystems produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (lookup counters, reload counters, rule gauge)
//!
//! Consumers:
//!     → stderr (pretty or JSON lines)
//!     → Metrics endpoint (Prometheus scrape, optional)
//! ```
//!
//! # Design Decisions
//! - Structured logging via `tracing`, `RUST_LOG` overrides config
//! - Metrics are cheap (no-ops until a recorder is installed)

pub mod logging;
pub mod metrics;
