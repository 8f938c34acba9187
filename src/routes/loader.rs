//! Route loading and mounting.
//!
//! # Responsibilities
//! - Scan the route directory once
//! - For each file, in scan order: resolve its mount path, parse it,
//!   resolve it through the provider registry, then mount or report it
//! - Count mounted and invalid modules
//!
//! # Design Decisions
//! - Files are processed strictly one at a time so mount order and log
//!   order match discovery order
//! - An `Invalid` module is logged and skipped; I/O, parse and injection
//!   failures abort the load
//! - Mounts made before a failure are not rolled back

use std::path::{Path, PathBuf};
use std::time::Instant;

use serde::Serialize;
use thiserror::Error;

use crate::config::RouteDirectoryConfig;
use crate::discovery::{MountPath, MountPathError, MountPathResolver, ScanError, Scanner};
use crate::inject::{Container, InjectError};
use crate::observability::metrics;
use crate::routes::manifest::{ManifestError, RouteManifest};
use crate::routes::module::RouteModule;
use crate::routes::mount::MountTarget;
use crate::routes::registry::ProviderRegistry;

/// Fatal load failures.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("route directory scan failed: {0}")]
    Scan(#[from] ScanError),

    #[error(transparent)]
    MountPath(#[from] MountPathError),

    #[error(transparent)]
    Module(#[from] ManifestError),

    #[error("failed to resolve route module {}: {source}", path.display())]
    Inject {
        path: PathBuf,
        #[source]
        source: InjectError,
    },
}

/// One mounted route file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MountRecord {
    pub mount_path: MountPath,
    pub source: PathBuf,
}

/// Result of a completed load.
#[derive(Debug, Clone, Default, Serialize)]
pub struct LoadOutcome {
    /// Bindings in mount order.
    pub mounts: Vec<MountRecord>,
    pub invalid: usize,
}

impl LoadOutcome {
    pub fn mounted(&self) -> usize {
        self.mounts.len()
    }
}

/// Loads every route file below a root directory onto a `MountTarget`.
pub struct RouteLoader<'a> {
    config: &'a RouteDirectoryConfig,
    registry: &'a ProviderRegistry,
    container: &'a Container,
}

impl<'a> RouteLoader<'a> {
    pub fn new(
        config: &'a RouteDirectoryConfig,
        registry: &'a ProviderRegistry,
        container: &'a Container,
    ) -> Self {
        Self {
            config,
            registry,
            container,
        }
    }

    /// Scan, resolve and mount all route files.
    pub async fn load<M>(&self, target: &mut M) -> Result<LoadOutcome, LoadError>
    where
        M: MountTarget + ?Sized,
    {
        let start = Instant::now();
        let root = &self.config.work_dir;
        let files = Scanner::new(self.config).scan(root).await?;
        let resolver = MountPathResolver::from_config(self.config);

        let mut outcome = LoadOutcome::default();
        for file in files {
            let mount_path = resolver.resolve(root, &file)?.mount_path;
            let manifest = RouteManifest::load(&file).await?;
            let module = self
                .registry
                .resolve(&manifest, self.container, &file)
                .map_err(|source| LoadError::Inject {
                    path: file.clone(),
                    source,
                })?;

            match module {
                RouteModule::Router(router) => {
                    tracing::info!(mount_path = %mount_path, "Loaded routes for {}", mount_path);
                    target.mount(&mount_path, router);
                    metrics::record_route_mounted();
                    outcome.mounts.push(MountRecord {
                        mount_path,
                        source: file,
                    });
                }
                RouteModule::Invalid(reason) => {
                    tracing::error!(
                        file = %relative_display(root, &file),
                        reason = %reason,
                        "Attempted to load invalid route module. Route modules must return a Router."
                    );
                    metrics::record_invalid_module();
                    outcome.invalid += 1;
                }
            }
        }

        metrics::record_load_duration(start);
        tracing::info!(
            root = %root.display(),
            mounted = outcome.mounted(),
            invalid = outcome.invalid,
            "Route directory loaded"
        );
        Ok(outcome)
    }
}

fn relative_display(root: &Path, file: &Path) -> String {
    file.strip_prefix(root).unwrap_or(file).display().to_string()
}
