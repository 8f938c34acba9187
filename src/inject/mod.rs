//! Dependency injection subsystem.
//!
//! # Data Flow
//! ```text
//! Application startup
//!     → container.rs (register named capabilities)
//!
//! Per route module:
//!     declared dependency names
//!     → Container::ensure (all present or NotFound)
//!     → provider resolves typed handles via Container::resolve
//! ```
//!
//! # Design Decisions
//! - Explicit registry passed by reference, no global injector
//! - Lookups fail with a named error rather than yielding a default

pub mod container;
pub mod error;

pub use container::Container;
pub use error::InjectError;
