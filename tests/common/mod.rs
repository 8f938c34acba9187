//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use axum::routing::get;
use axum::Router;
use route_directory::routes::{ProviderContext, RouteModule};
use route_directory::{Container, ProviderRegistry, RouteDirectoryConfig};
use tempfile::TempDir;

/// A temporary route directory.
pub struct RouteTree {
    dir: TempDir,
}

impl RouteTree {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write a route file at `rel`, creating parent directories.
    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    /// Route file using `provider` with no options.
    pub fn route(&self, rel: &str, provider: &str) -> PathBuf {
        self.file(rel, &format!("provider = \"{provider}\"\n"))
    }

    pub fn config(&self) -> RouteDirectoryConfig {
        RouteDirectoryConfig::with_work_dir(self.root())
    }
}

/// Providers used across tests.
///
/// - `text`: `GET /` → `options.text`
/// - `invalid`: always an invalid module
/// - `needs-db`: requires the `Db` capability
pub fn test_registry() -> ProviderRegistry {
    let mut registry = ProviderRegistry::with_builtin();
    registry
        .register_fn("text", |ctx: &ProviderContext<'_>| {
            let text = ctx
                .options
                .get("text")
                .and_then(|v| v.as_str())
                .unwrap_or_default()
                .to_string();
            Ok(Router::new()
                .route("/", get(move || async move { text }))
                .into())
        })
        .register_fn("invalid", |_ctx: &ProviderContext<'_>| {
            Ok(RouteModule::invalid("returned a plain object"))
        })
        .register_fn("needs-db", |ctx: &ProviderContext<'_>| {
            let db = ctx.container.resolve::<String>("Db")?;
            let db = db.as_ref().clone();
            Ok(Router::new()
                .route("/", get(move || async move { db }))
                .into())
        });
    registry
}

pub fn empty_container() -> Container {
    Container::new()
}

/// Captures formatted log output for the current thread.
#[derive(Clone, Default)]
pub struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LogBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }

    /// Number of log lines containing `needle`.
    pub fn count(&self, needle: &str) -> usize {
        self.contents().lines().filter(|l| l.contains(needle)).count()
    }
}

/// Route log events on this thread into a buffer until the guard drops.
///
/// Only reliable with the current-thread Tokio runtime.
pub fn capture_logs() -> (LogBuffer, tracing::subscriber::DefaultGuard) {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    let guard = tracing::subscriber::set_default(subscriber);
    (buffer, guard)
}
