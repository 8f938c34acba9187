//! Application identity endpoint, fed by the container.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::inject::InjectError;
use crate::routes::{ProviderContext, RouteModule, RouteProvider};

/// Capability name the info provider depends on.
pub const APP_INFO: &str = "AppInfo";

/// Name and version of the running application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppInfo {
    pub name: String,
    pub version: String,
}

impl AppInfo {
    /// Identity of this crate.
    pub fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME").to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// `GET /` → the registered `AppInfo` as JSON.
pub struct InfoProvider;

impl RouteProvider for InfoProvider {
    fn dependencies(&self) -> &[&'static str] {
        &[APP_INFO]
    }

    fn provide(&self, ctx: &ProviderContext<'_>) -> Result<RouteModule, InjectError> {
        let info = ctx.container.resolve::<AppInfo>(APP_INFO)?;
        Ok(Router::new().route("/", get(app_info)).with_state(info).into())
    }
}

async fn app_info(State(info): State<Arc<AppInfo>>) -> Json<AppInfo> {
    Json(info.as_ref().clone())
}
