//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main.rs):
//!     Load config → Validate → Build container + providers
//!     → RouteDirectory::load → RouteDirectory::start → Start listener
//!
//! Shutdown (shutdown.rs, signals.rs):
//!     SIGTERM/SIGINT → Trigger shutdown → Stop accepting → Drain
//!     → RouteDirectory::stop → Exit
//! ```
//!
//! # Design Decisions
//! - Fail fast: any startup error, including a fatal route load, is fatal
//! - Routes are mounted before the listener starts accepting traffic

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
pub use signals::shutdown_on_signal;
