//! Request echo, useful for checking where a route file got mounted.

use axum::extract::OriginalUri;
use axum::http::{Method, Uri};
use axum::routing::any;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::inject::InjectError;
use crate::routes::{ProviderContext, RouteModule, RouteProvider};

/// Any method, any sub-path → method, mounted-relative path and full path.
pub struct EchoProvider;

impl RouteProvider for EchoProvider {
    fn provide(&self, _ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
        let router = Router::new()
            .route("/", any(echo))
            .route("/{*rest}", any(echo));
        Ok(router.into())
    }
}

async fn echo(method: Method, uri: Uri, OriginalUri(original): OriginalUri) -> Json<Value> {
    Json(json!({
        "method": method.as_str(),
        "path": uri.path(),
        "original_path": original.path(),
    }))
}
