//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Accept routers from the route loader at their mount paths
//! - Compose them into one Axum application
//! - Wire up middleware (tracing, timeout, request ID)
//! - Serve on a listener until shutdown
//!
//! # Design Decisions
//! - Non-root mount paths are nested, so a router sees paths relative to
//!   its mount point
//! - Routers mounted at `/` become the application fallback, reached when
//!   no nested mount matches
//! - Several routers on one mount path are chained in mount order: the
//!   first that matches handles the request, the rest are its fallbacks
//! - Mount paths are nested as literals; `MountPath` never carries captures
//!   or wildcards

use std::io;
use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::TimeoutConfig;
use crate::discovery::MountPath;
use crate::http::request::{MakeRequestUuidV4, X_REQUEST_ID};
use crate::routes::MountTarget;

/// Host web server that route modules are mounted on.
pub struct HttpServer {
    mounts: Vec<(MountPath, Router)>,
    timeouts: TimeoutConfig,
}

impl HttpServer {
    pub fn new(timeouts: TimeoutConfig) -> Self {
        Self {
            mounts: Vec::new(),
            timeouts,
        }
    }

    /// Mount paths in registration order.
    pub fn mount_paths(&self) -> impl Iterator<Item = &MountPath> {
        self.mounts.iter().map(|(path, _)| path)
    }

    /// Build the Axum router with all mounts and middleware layers.
    #[allow(deprecated)]
    pub fn into_router(self) -> Router {
        let mut groups: Vec<(MountPath, Vec<Router>)> = Vec::new();
        for (path, router) in self.mounts {
            match groups.iter_mut().find(|(existing, _)| *existing == path) {
                Some((_, routers)) => routers.push(router),
                None => groups.push((path, vec![router])),
            }
        }

        let mut app = Router::new();
        let mut root = None;
        for (path, routers) in groups {
            let chained = chain(routers);
            if path.is_root() {
                root = Some(chained);
            } else {
                app = app.nest(path.as_str(), chained);
            }
        }
        if let Some(root) = root {
            app = app.fallback_service(root);
        }

        app.layer(TimeoutLayer::new(Duration::from_secs(self.timeouts.request_secs)))
            .layer(PropagateRequestIdLayer::new(X_REQUEST_ID))
            .layer(SetRequestIdLayer::new(X_REQUEST_ID, MakeRequestUuidV4))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            mounts = self.mounts.len(),
            "HTTP server starting"
        );

        let app = self.into_router();
        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

impl MountTarget for HttpServer {
    fn mount(&mut self, mount_path: &MountPath, router: Router) {
        tracing::debug!(mount_path = %mount_path, "Mounting router");
        self.mounts.push((mount_path.clone(), router));
    }
}

fn chain(routers: Vec<Router>) -> Router {
    routers
        .into_iter()
        .rev()
        .reduce(|next, prev| prev.fallback_service(next))
        .unwrap_or_default()
}
