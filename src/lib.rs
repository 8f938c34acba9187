//! Convention-based route loading for Axum.
//!
//! Route files placed under a directory are discovered, mapped to URL mount
//! paths from their location, resolved through named providers and a
//! dependency container, and mounted on a host server.

pub mod config;
pub mod discovery;
pub mod http;
pub mod inject;
pub mod lifecycle;
pub mod observability;
pub mod plugin;
pub mod providers;
pub mod routes;

pub use config::{AppConfig, RouteDirectoryConfig};
pub use discovery::{MountPath, Scanner};
pub use http::HttpServer;
pub use inject::Container;
pub use lifecycle::Shutdown;
pub use plugin::RouteDirectory;
pub use routes::{LoadError, LoadOutcome, MountTarget, ProviderRegistry, RouteModule, RouteProvider};
