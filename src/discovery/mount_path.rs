//! Mount path derivation.
//!
//! Maps a route file's location below the route root to the URL path it is
//! mounted at:
//!
//! ```text
//! routes/index.toml           → /
//! routes/checkout.toml        → /        (warns: non-index name at base level)
//! routes/users/index.toml     → /users
//! routes/users/Profile.toml   → /users/profile
//! routes/Admin/Audit/log.json → /admin/audit/log
//! ```
//!
//! Resolution is pure: the same (root, file, index names) always yields the
//! same mount path, independent of scan order.
//!
//! Segments are mounted literally. A segment the host router would read as
//! route syntax (`{`, `}`, `*`, or a leading `:`) is rejected, so a
//! `MountPath` never turns into a capture or wildcard.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::config::RouteDirectoryConfig;

/// Stems that mount a file at its directory's path.
pub const DEFAULT_INDEX_NAMES: [&str; 4] = ["index", "base", "main", "root"];

/// A lowercase, `/`-rooted URL path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct MountPath(String);

impl MountPath {
    /// The base mount path, `/`.
    pub fn root() -> Self {
        Self("/".to_string())
    }

    fn from_segments(segments: &[&str]) -> Self {
        Self(format!("/{}", segments.join("/")).to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0 == "/"
    }
}

impl fmt::Display for MountPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl AsRef<str> for MountPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Errors from mount path derivation.
#[derive(Debug, Error)]
pub enum MountPathError {
    /// The file does not live below the route root.
    #[error("{} is not a file inside {}", file.display(), root.display())]
    OutsideRoot { root: PathBuf, file: PathBuf },

    /// A path component cannot be represented in a URL path.
    #[error("{} contains a non UTF-8 component", file.display())]
    NonUtf8 { file: PathBuf },

    /// A segment would be read as route syntax instead of a literal.
    #[error("{} has segment '{segment}' that cannot be mounted literally", file.display())]
    RouteSyntax { file: PathBuf, segment: String },
}

/// Whether the host router would interpret `segment` as a capture or wildcard.
fn is_route_syntax(segment: &str) -> bool {
    segment.contains(['{', '}', '*']) || segment.starts_with(':')
}

/// Outcome of resolving one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMount {
    pub mount_path: MountPath,
    /// The file sits directly in the root but its stem is not an index name.
    pub nonstandard_base: bool,
}

/// Derives mount paths using a fixed set of index names.
#[derive(Debug, Clone)]
pub struct MountPathResolver {
    index_names: Vec<String>,
}

impl Default for MountPathResolver {
    fn default() -> Self {
        Self::new(DEFAULT_INDEX_NAMES)
    }
}

impl MountPathResolver {
    pub fn new<I, S>(index_names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            index_names: index_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn from_config(config: &RouteDirectoryConfig) -> Self {
        Self::new(config.index_names.iter().cloned())
    }

    /// Exact, case-sensitive index name check.
    pub fn is_index_name(&self, name: &str) -> bool {
        self.index_names.iter().any(|n| n == name)
    }

    /// Resolve the mount path for `file`, which must live below `root`.
    pub fn resolve(&self, root: &Path, file: &Path) -> Result<ResolvedMount, MountPathError> {
        let outside = || MountPathError::OutsideRoot {
            root: root.to_path_buf(),
            file: file.to_path_buf(),
        };

        let relative = file.strip_prefix(root).map_err(|_| outside())?;

        let mut segments = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => segments.push(part.to_str().ok_or_else(|| {
                    MountPathError::NonUtf8 {
                        file: file.to_path_buf(),
                    }
                })?),
                Component::CurDir => {}
                _ => return Err(outside()),
            }
        }

        let file_name = segments.pop().ok_or_else(outside)?;
        let name = Path::new(file_name)
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or(file_name);

        if segments.is_empty() {
            let nonstandard_base = !self.is_index_name(name);
            if nonstandard_base {
                tracing::warn!(
                    file = %file.display(),
                    "Non default name used for base route file"
                );
            }
            return Ok(ResolvedMount {
                mount_path: MountPath::root(),
                nonstandard_base,
            });
        }

        if !self.is_index_name(name) {
            segments.push(name);
        }

        if let Some(segment) = segments.iter().find(|s| is_route_syntax(s)) {
            return Err(MountPathError::RouteSyntax {
                file: file.to_path_buf(),
                segment: segment.to_string(),
            });
        }

        Ok(ResolvedMount {
            mount_path: MountPath::from_segments(&segments),
            nonstandard_base: false,
        })
    }
}

/// Resolve `file` against `root` with the default index names.
pub fn resolve_mount_path(root: &Path, file: &Path) -> Result<ResolvedMount, MountPathError> {
    MountPathResolver::default().resolve(root, file)
}
