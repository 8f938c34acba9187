//! Injection error definitions.

use thiserror::Error;

/// Errors raised while resolving a route module through the container.
///
/// All of these are fatal to a load: a module whose dependencies cannot be
/// satisfied means the route set cannot be trusted.
#[derive(Debug, Error)]
pub enum InjectError {
    /// No capability is registered under this name.
    #[error("dependency '{name}' is not registered")]
    NotFound { name: String },

    /// A capability exists but holds a different type.
    #[error("dependency '{name}' is not a {expected}")]
    TypeMismatch { name: String, expected: &'static str },

    /// A manifest names a provider the registry does not know.
    #[error("unknown route provider '{name}'")]
    UnknownProvider { name: String },

    /// The provider itself failed while building its routes.
    #[error("route provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },
}

impl InjectError {
    pub fn provider(provider: impl Into<String>, message: impl ToString) -> Self {
        Self::Provider {
            provider: provider.into(),
            message: message.to_string(),
        }
    }
}
