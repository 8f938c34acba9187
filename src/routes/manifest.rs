//! Route file parsing.
//!
//! A route file names the provider that builds its routes, any extra
//! dependencies it needs, and provider options. The format is picked from the
//! file extension:
//!
//! ```toml
//! provider = "static"
//! inject = ["AppInfo"]
//!
//! [options]
//! body = "hello"
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Errors from reading or parsing a route file.
#[derive(Debug, Error)]
pub enum ManifestError {
    #[error("failed to read route file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML in route file {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid JSON in route file {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("unsupported route file type: {}", path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// Parsed contents of a route file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RouteManifest {
    /// Registered provider name.
    pub provider: String,

    /// Dependencies required on top of the provider's own.
    #[serde(default)]
    pub inject: Vec<String>,

    #[serde(default)]
    pub options: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Toml,
    Json,
}

fn format_of(path: &Path) -> Option<Format> {
    match path.extension()?.to_str()? {
        "toml" => Some(Format::Toml),
        "json" => Some(Format::Json),
        _ => None,
    }
}

impl RouteManifest {
    /// Read and parse the route file at `path`.
    pub async fn load(path: &Path) -> Result<Self, ManifestError> {
        let format = format_of(path).ok_or_else(|| ManifestError::UnsupportedFormat {
            path: path.to_path_buf(),
        })?;

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|source| ManifestError::Io {
                path: path.to_path_buf(),
                source,
            })?;

        Self::parse(path, format, &content)
    }

    fn parse(path: &Path, format: Format, content: &str) -> Result<Self, ManifestError> {
        match format {
            Format::Toml => toml::from_str(content).map_err(|source| ManifestError::Toml {
                path: path.to_path_buf(),
                source,
            }),
            Format::Json => serde_json::from_str(content).map_err(|source| ManifestError::Json {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Dependencies listed under `inject`.
    pub fn declared_dependencies(&self) -> impl Iterator<Item = &str> {
        self.inject.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_toml() {
        let manifest = RouteManifest::parse(
            Path::new("users.toml"),
            Format::Toml,
            r#"
            provider = "static"
            inject = ["AppInfo"]

            [options]
            body = "hi"
            status = 201
            "#,
        )
        .unwrap();

        assert_eq!(manifest.provider, "static");
        assert_eq!(manifest.inject, vec!["AppInfo"]);
        assert_eq!(manifest.options, json!({ "body": "hi", "status": 201 }));
    }

    #[test]
    fn test_parse_json_without_optional_fields() {
        let manifest =
            RouteManifest::parse(Path::new("a.json"), Format::Json, r#"{"provider":"health"}"#).unwrap();
        assert_eq!(manifest.provider, "health");
        assert!(manifest.inject.is_empty());
        assert_eq!(manifest.options, Value::Null);
    }

    #[test]
    fn test_missing_provider_is_an_error() {
        let err = RouteManifest::parse(Path::new("a.toml"), Format::Toml, "inject = []").unwrap_err();
        assert!(matches!(err, ManifestError::Toml { .. }));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(format_of(Path::new("a/b.toml")), Some(Format::Toml));
        assert_eq!(format_of(Path::new("b.json")), Some(Format::Json));
        assert_eq!(format_of(Path::new("b.js")), None);
        assert_eq!(format_of(Path::new("README")), None);
    }

    #[tokio::test]
    async fn test_load_unsupported_extension() {
        let err = RouteManifest::load(Path::new("routes/readme.md")).await.unwrap_err();
        assert!(matches!(err, ManifestError::UnsupportedFormat { .. }));
    }

    #[tokio::test]
    async fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.toml");
        std::fs::write(&path, "provider = \"health\"\n").unwrap();

        let manifest = RouteManifest::load(&path).await.unwrap();
        assert_eq!(manifest.provider, "health");
    }
}
