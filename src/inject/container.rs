//! Named capability registry.

use std::any::{type_name, Any};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::inject::InjectError;

type Capability = Arc<dyn Any + Send + Sync>;

/// Maps symbolic dependency names to shared values.
///
/// Route providers declare the names they need; the loader checks them
/// before invoking the provider, which then resolves typed handles.
#[derive(Clone, Default)]
pub struct Container {
    capabilities: BTreeMap<String, Capability>,
}

impl Container {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `value` under `name`, replacing any previous value.
    pub fn provide<T>(&mut self, name: impl Into<String>, value: T) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        self.provide_arc(name, Arc::new(value))
    }

    /// Register an already shared value.
    pub fn provide_arc<T>(&mut self, name: impl Into<String>, value: Arc<T>) -> &mut Self
    where
        T: Any + Send + Sync,
    {
        self.capabilities.insert(name.into(), value);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.capabilities.keys().map(String::as_str)
    }

    /// Resolve a typed handle to the capability registered as `name`.
    pub fn resolve<T>(&self, name: &str) -> Result<Arc<T>, InjectError>
    where
        T: Any + Send + Sync,
    {
        let capability = self
            .capabilities
            .get(name)
            .ok_or_else(|| InjectError::NotFound {
                name: name.to_string(),
            })?;

        Arc::clone(capability)
            .downcast::<T>()
            .map_err(|_| InjectError::TypeMismatch {
                name: name.to_string(),
                expected: type_name::<T>(),
            })
    }

    /// Fail with the first name that is not registered.
    pub fn ensure<'a, I>(&self, names: I) -> Result<(), InjectError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        match names.into_iter().find(|name| !self.contains(name)) {
            Some(name) => Err(InjectError::NotFound {
                name: name.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("capabilities", &self.capabilities.keys().collect::<Vec<_>>())
            .finish()
    }
}
