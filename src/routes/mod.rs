//! Route module subsystem.
//!
//! # Data Flow
//! ```text
//! discovered file
//!     → manifest.rs (read + parse route file)
//!     → registry.rs (provider lookup, dependency check, invoke)
//!     → module.rs (RouteModule::Router | RouteModule::Invalid)
//!     → loader.rs (mount on MountTarget, or log and skip)
//! ```
//!
//! # Design Decisions
//! - Route files are data; the code that builds routers is compiled in
//!   and selected by provider name
//! - Validity is a tagged variant, not a runtime shape check

pub mod loader;
pub mod manifest;
pub mod module;
pub mod mount;
pub mod registry;

pub use loader::{LoadError, LoadOutcome, MountRecord, RouteLoader};
pub use manifest::{ManifestError, RouteManifest};
pub use module::{ProviderContext, RouteModule, RouteProvider};
pub use mount::{MountLog, MountTarget};
pub use registry::ProviderRegistry;
