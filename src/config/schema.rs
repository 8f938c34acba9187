//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the route
//! directory host. All types derive Serde traits for deserialization from
//! config files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration for the route directory host.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Route directory discovery settings.
    pub routes: RouteDirectoryConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:3000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// What the scanner does with directories whose name starts with the hidden prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum HiddenDirPolicy {
    /// Hidden directories are not walked at all.
    #[default]
    Skip,
    /// Hidden directories are walked; only hidden files are dropped.
    Descend,
}

/// Route directory settings.
///
/// Immutable for the duration of a load; passed by reference into the
/// scanner, resolver and loader.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouteDirectoryConfig {
    /// Directory to load route modules from.
    pub work_dir: PathBuf,

    /// Entries whose name starts with this prefix are hidden.
    pub hidden_prefix: String,

    /// Treatment of hidden directories.
    pub hidden_dirs: HiddenDirPolicy,

    /// Sort directory entries by name at every level.
    pub sort_entries: bool,

    /// File stems that mount at their directory's path instead of a sub-path.
    pub index_names: Vec<String>,
}

impl Default for RouteDirectoryConfig {
    fn default() -> Self {
        Self {
            work_dir: PathBuf::from("./routes"),
            hidden_prefix: ".".to_string(),
            hidden_dirs: HiddenDirPolicy::default(),
            sort_entries: true,
            index_names: default_index_names(),
        }
    }
}

impl RouteDirectoryConfig {
    /// Config rooted at `work_dir` with every other setting at its default.
    pub fn with_work_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            ..Self::default()
        }
    }
}

fn default_index_names() -> Vec<String> {
    ["index", "base", "main", "root"]
        .into_iter()
        .map(String::from)
        .collect()
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Default filter directive, overridden by `RUST_LOG`.
    pub log_filter: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_filter: "route_directory=info,tower_http=info".to_string(),
            log_format: LogFormat::default(),
            metrics_enabled: false,
            metrics_address: "127.0.0.1:9090".to_string(),
        }
    }
}
