//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Scanner, resolver, loader, HTTP server produce:
//!     → logging.rs (structured log events)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → stdout (pretty or JSON)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Structured fields (mount_path, file) on every route event
//! - Metrics endpoint is opt-in

pub mod logging;
pub mod metrics;
