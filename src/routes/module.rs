//! Route module values and the provider contract.

use std::fmt;
use std::path::Path;

use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::inject::{Container, InjectError};

/// What a route provider hands back to the loader.
///
/// Only `Router` is mounted. `Invalid` is an authoring mistake: it is logged
/// with the offending file and skipped without failing the load.
pub enum RouteModule {
    Router(Router),
    Invalid(String),
}

impl RouteModule {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid(reason.into())
    }

    pub fn is_router(&self) -> bool {
        matches!(self, Self::Router(_))
    }
}

impl From<Router> for RouteModule {
    fn from(router: Router) -> Self {
        Self::Router(router)
    }
}

impl fmt::Debug for RouteModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Router(_) => f.write_str("Router(..)"),
            Self::Invalid(reason) => f.debug_tuple("Invalid").field(reason).finish(),
        }
    }
}

/// Everything a provider can see while building its routes.
pub struct ProviderContext<'a> {
    pub provider: &'a str,
    pub container: &'a Container,
    pub options: &'a Value,
    /// The route file being loaded.
    pub source: &'a Path,
}

impl ProviderContext<'_> {
    /// Deserialize the manifest's `options` table into `T`.
    ///
    /// A missing table deserializes from an empty object so `T` can lean on
    /// `#[serde(default)]`.
    pub fn options<T: DeserializeOwned>(&self) -> Result<T, InjectError> {
        let value = match self.options {
            Value::Null => Value::Object(Default::default()),
            other => other.clone(),
        };
        serde_json::from_value(value).map_err(|e| InjectError::provider(self.provider, e))
    }
}

/// Builds the routes for one kind of route file.
pub trait RouteProvider: Send + Sync {
    /// Capability names that must be present in the container.
    fn dependencies(&self) -> &[&'static str] {
        &[]
    }

    fn provide(&self, ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError>;
}

impl<F> RouteProvider for F
where
    F: Fn(&ProviderContext<'_>) -> Result<RouteModule, InjectError> + Send + Sync,
{
    fn provide(&self, ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
        self(ctx)
    }
}
