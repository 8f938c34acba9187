//! Liveness endpoint.

use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::inject::InjectError;
use crate::routes::{ProviderContext, RouteModule, RouteProvider};

/// `GET /` → `{"status":"ok"}`.
pub struct HealthProvider;

impl RouteProvider for HealthProvider {
    fn provide(&self, _ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
        Ok(Router::new().route("/", get(health)).into())
    }
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
