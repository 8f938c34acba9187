//! Route directory plugin.
//!
//! Wraps the loader behind the load/start/stop contract a host application
//! drives its plugins through. Only `load` does work; `start` and `stop`
//! complete immediately.

use crate::config::RouteDirectoryConfig;
use crate::inject::Container;
use crate::routes::{LoadError, LoadOutcome, MountTarget, ProviderRegistry, RouteLoader};

/// Static description of a plugin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PluginMetadata {
    pub name: &'static str,
    pub layer: &'static str,
    /// What the plugin adds to the container.
    pub kind: &'static str,
}

/// Loads route files from a directory and mounts them on a host server.
#[derive(Debug, Clone, Default)]
pub struct RouteDirectory {
    config: RouteDirectoryConfig,
}

impl RouteDirectory {
    pub const METADATA: PluginMetadata = PluginMetadata {
        name: "Router",
        layer: "router",
        kind: "none",
    };

    pub fn new(config: RouteDirectoryConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RouteDirectoryConfig {
        &self.config
    }

    /// Mount every route file under the configured directory on `target`.
    pub async fn load<M>(
        &self,
        container: &Container,
        registry: &ProviderRegistry,
        target: &mut M,
    ) -> Result<LoadOutcome, LoadError>
    where
        M: MountTarget + ?Sized,
    {
        tracing::info!(
            plugin = Self::METADATA.name,
            work_dir = %self.config.work_dir.display(),
            "Loading route directory"
        );
        RouteLoader::new(&self.config, registry, container)
            .load(target)
            .await
    }

    pub async fn start(&self) -> Result<(), LoadError> {
        Ok(())
    }

    pub async fn stop(&self) -> Result<(), LoadError> {
        Ok(())
    }
}
