//! Route providers bundled with the binary.
//!
//! | name     | dependencies | serves                                |
//! |----------|--------------|---------------------------------------|
//! | `health` |              | `{"status":"ok"}`                     |
//! | `static` |              | `options.body` with `content_type`    |
//! | `info`   | `AppInfo`    | application name and version          |
//! | `echo`   |              | method and path of any request        |

pub mod echo;
pub mod health;
pub mod info;
pub mod static_page;

use crate::routes::ProviderRegistry;

pub use echo::EchoProvider;
pub use health::HealthProvider;
pub use info::{AppInfo, InfoProvider, APP_INFO};
pub use static_page::StaticProvider;

impl ProviderRegistry {
    /// Registry holding every bundled provider.
    pub fn with_builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("health", HealthProvider)
            .register("static", StaticProvider)
            .register("info", InfoProvider)
            .register("echo", EchoProvider);
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inject::{Container, InjectError};
    use crate::routes::{RouteManifest, RouteModule};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::Router;
    use serde_json::{json, Value};
    use std::path::Path;
    use tower::ServiceExt;

    fn resolve(provider: &str, options: Value, container: &Container) -> Result<RouteModule, InjectError> {
        let manifest = RouteManifest {
            provider: provider.to_string(),
            inject: Vec::new(),
            options,
        };
        ProviderRegistry::with_builtin().resolve(&manifest, container, Path::new("test.toml"))
    }

    fn router(module: RouteModule) -> Router {
        match module {
            RouteModule::Router(router) => router,
            RouteModule::Invalid(reason) => panic!("invalid module: {reason}"),
        }
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::String(
            String::from_utf8_lossy(&bytes).into_owned(),
        ));
        (status, body)
    }

    #[test]
    fn test_builtin_names() {
        assert_eq!(
            ProviderRegistry::with_builtin().names(),
            vec!["echo", "health", "info", "static"]
        );
    }

    #[tokio::test]
    async fn test_health() {
        let module = resolve("health", Value::Null, &Container::new()).unwrap();
        let (status, body) = get(router(module), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn test_static() {
        let module = resolve("static", json!({ "body": "hello", "status": 201 }), &Container::new()).unwrap();
        let (status, body) = get(router(module), "/").await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body, Value::String("hello".into()));
    }

    #[test]
    fn test_static_bad_status_is_invalid() {
        let module = resolve("static", json!({ "status": 1000 }), &Container::new()).unwrap();
        assert!(matches!(module, RouteModule::Invalid(_)));
    }

    #[test]
    fn test_static_bad_options_is_provider_error() {
        let err = resolve("static", json!({ "status": "nope" }), &Container::new()).unwrap_err();
        assert!(matches!(err, InjectError::Provider { .. }));
    }

    #[tokio::test]
    async fn test_info_requires_app_info() {
        let err = resolve("info", Value::Null, &Container::new()).unwrap_err();
        assert!(matches!(err, InjectError::NotFound { ref name } if name == APP_INFO));

        let mut container = Container::new();
        container.provide(APP_INFO, AppInfo { name: "demo".into(), version: "1.2.3".into() });
        let module = resolve("info", Value::Null, &container).unwrap();
        let (_, body) = get(router(module), "/").await;
        assert_eq!(body, json!({ "name": "demo", "version": "1.2.3" }));
    }

    #[tokio::test]
    async fn test_echo_sub_paths() {
        let module = resolve("echo", Value::Null, &Container::new()).unwrap();
        let (_, body) = get(router(module), "/a/b").await;
        assert_eq!(body["method"], "GET");
        assert_eq!(body["path"], "/a/b");
    }
}
