//! Route file discovery subsystem.
//!
//! # Data Flow
//! ```text
//! RouteDirectoryConfig.work_dir
//!     → scanner.rs (recursive listing, hidden entries filtered)
//!     → Vec<PathBuf> in depth-first order
//!     → mount_path.rs (relative path → lowercase URL mount path)
//! ```
//!
//! # Design Decisions
//! - Scanner and resolver share no state; the resolver does no I/O
//! - Mount paths depend only on location, never on file contents

pub mod mount_path;
pub mod scanner;

use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

use crate::config::RouteDirectoryConfig;

pub use mount_path::{resolve_mount_path, MountPath, MountPathError, MountPathResolver, ResolvedMount};
pub use scanner::{ScanError, Scanner};

/// A route file together with the path it would be mounted at.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveredRoute {
    pub mount_path: MountPath,
    pub source: PathBuf,
}

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error(transparent)]
    Scan(#[from] ScanError),

    #[error(transparent)]
    MountPath(#[from] MountPathError),
}

/// Scan the configured directory and resolve every file's mount path
/// without loading anything.
pub async fn discover(config: &RouteDirectoryConfig) -> Result<Vec<DiscoveredRoute>, DiscoveryError> {
    let files = Scanner::new(config).scan(&config.work_dir).await?;
    let resolver = MountPathResolver::from_config(config);

    files
        .into_iter()
        .map(|source| {
            let resolved = resolver.resolve(&config.work_dir, &source)?;
            Ok(DiscoveredRoute {
                mount_path: resolved.mount_path,
                source,
            })
        })
        .collect()
}
