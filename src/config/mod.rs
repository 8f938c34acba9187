//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → RouteDirectoryConfig passed by reference into each load
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; there is no process-wide instance
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::{
    AppConfig, HiddenDirPolicy, ListenerConfig, LogFormat, ObservabilityConfig,
    RouteDirectoryConfig, TimeoutConfig,
};
