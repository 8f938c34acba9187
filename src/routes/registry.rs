//! Provider lookup and invocation.
//!
//! # Responsibilities
//! - Map provider names from route files to compiled providers
//! - Check declared dependencies against the container
//! - Invoke the provider and hand its `RouteModule` back to the loader
//!
//! # Design Decisions
//! - Dependency checks run before the provider, so a missing capability is
//!   reported by name rather than surfacing as a provider failure
//! - Registry is built once at startup and only read during a load

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::inject::{Container, InjectError};
use crate::routes::manifest::RouteManifest;
use crate::routes::module::{ProviderContext, RouteModule, RouteProvider};

/// Named route providers available to route files.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn RouteProvider>>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `provider` under `name`, replacing any previous provider.
    pub fn register<P>(&mut self, name: impl Into<String>, provider: P) -> &mut Self
    where
        P: RouteProvider + 'static,
    {
        self.providers.insert(name.into(), Arc::new(provider));
        self
    }

    /// Register a closure provider with no declared dependencies.
    pub fn register_fn<F>(&mut self, name: impl Into<String>, provider: F) -> &mut Self
    where
        F: Fn(&ProviderContext<'_>) -> Result<RouteModule, InjectError> + Send + Sync + 'static,
    {
        self.register(name, provider)
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn RouteProvider>> {
        self.providers.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.providers.contains_key(name)
    }

    /// Registered provider names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.providers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve a parsed route file into a route module.
    pub fn resolve(
        &self,
        manifest: &RouteManifest,
        container: &Container,
        source: &Path,
    ) -> Result<RouteModule, InjectError> {
        let provider = self
            .get(&manifest.provider)
            .ok_or_else(|| InjectError::UnknownProvider {
                name: manifest.provider.clone(),
            })?;

        container.ensure(provider.dependencies().iter().copied())?;
        container.ensure(manifest.declared_dependencies())?;

        let ctx = ProviderContext {
            provider: &manifest.provider,
            container,
            options: &manifest.options,
            source,
        };
        provider.provide(&ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use serde_json::Value;

    struct NeedsDb;

    impl RouteProvider for NeedsDb {
        fn dependencies(&self) -> &[&'static str] {
            &["Db"]
        }

        fn provide(&self, _ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
            Ok(RouteModule::Router(Router::new()))
        }
    }

    fn manifest(provider: &str, inject: &[&str]) -> RouteManifest {
        RouteManifest {
            provider: provider.to_string(),
            inject: inject.iter().map(|s| s.to_string()).collect(),
            options: Value::Null,
        }
    }

    #[test]
    fn test_unknown_provider() {
        let registry = ProviderRegistry::new();
        let err = registry
            .resolve(&manifest("nope", &[]), &Container::new(), Path::new("a.toml"))
            .unwrap_err();
        assert!(matches!(err, InjectError::UnknownProvider { ref name } if name == "nope"));
    }

    #[test]
    fn test_provider_dependencies_checked() {
        let mut registry = ProviderRegistry::new();
        registry.register("db", NeedsDb);

        let err = registry
            .resolve(&manifest("db", &[]), &Container::new(), Path::new("a.toml"))
            .unwrap_err();
        assert!(matches!(err, InjectError::NotFound { ref name } if name == "Db"));

        let mut container = Container::new();
        container.provide("Db", ());
        let module = registry
            .resolve(&manifest("db", &[]), &container, Path::new("a.toml"))
            .unwrap();
        assert!(module.is_router());
    }

    #[test]
    fn test_manifest_dependencies_checked() {
        let mut registry = ProviderRegistry::new();
        registry.register_fn("plain", |_ctx| Ok(RouteModule::invalid("not a router")));

        let err = registry
            .resolve(&manifest("plain", &["Cache"]), &Container::new(), Path::new("a.toml"))
            .unwrap_err();
        assert!(matches!(err, InjectError::NotFound { ref name } if name == "Cache"));
    }

    #[test]
    fn test_closure_sees_context() {
        let mut registry = ProviderRegistry::new();
        registry.register_fn("ctx", |ctx| {
            assert_eq!(ctx.provider, "ctx");
            assert_eq!(ctx.source, Path::new("users/index.toml"));
            Ok(RouteModule::invalid("checked"))
        });

        let module = registry
            .resolve(&manifest("ctx", &[]), &Container::new(), Path::new("users/index.toml"))
            .unwrap();
        assert!(matches!(module, RouteModule::Invalid(ref reason) if reason == "checked"));
        assert_eq!(registry.names(), vec!["ctx"]);
    }
}
