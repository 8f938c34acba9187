//! Fixed response body from route file options.

use axum::http::{header, StatusCode};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;

use crate::inject::InjectError;
use crate::routes::{ProviderContext, RouteModule, RouteProvider};

#[derive(Debug, Deserialize)]
#[serde(default)]
struct StaticOptions {
    body: String,
    content_type: String,
    status: u16,
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self {
            body: String::new(),
            content_type: "text/plain; charset=utf-8".to_string(),
            status: 200,
        }
    }
}

/// `GET /` → the configured body.
///
/// An unusable status code makes the module invalid rather than failing
/// the whole load.
pub struct StaticProvider;

impl RouteProvider for StaticProvider {
    fn provide(&self, ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
        let options: StaticOptions = ctx.options()?;
        let Ok(status) = StatusCode::from_u16(options.status) else {
            return Ok(RouteModule::invalid(format!(
                "status {} is not an HTTP status code",
                options.status
            )));
        };

        let content_type = options.content_type;
        let body = options.body;
        let router = Router::new().route(
            "/",
            get(move || {
                let content_type = content_type.clone();
                let body = body.clone();
                async move { (status, [(header::CONTENT_TYPE, content_type)], body) }
            }),
        );
        Ok(router.into())
    }
}
