//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! route loader
//!     → server.rs (MountTarget: collect routers per mount path)
//!     → into_router (nest / fallback / chain, then middleware)
//!     → request.rs (request ID on every request)
//!     → axum::serve
//! ```

pub mod request;
pub mod server;

pub use request::{MakeRequestUuidV4, X_REQUEST_ID};
pub use server::HttpServer;
