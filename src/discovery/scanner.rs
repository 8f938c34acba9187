//! Recursive route file discovery.
//!
//! # Responsibilities
//! - List every regular, non-hidden file below the route root
//! - Descend into subdirectories (hidden ones per `HiddenDirPolicy`)
//! - Produce one flat, depth-first sequence of paths
//!
//! # Design Decisions
//! - Subdirectories of one level are scanned concurrently, then spliced back
//!   in listing order, so completion order never leaks into the result
//! - Optional per-level name sort makes the order platform independent
//! - Any listing or stat failure aborts the whole scan

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use futures_util::future::{try_join_all, BoxFuture, FutureExt};
use thiserror::Error;

use crate::config::{HiddenDirPolicy, RouteDirectoryConfig};

/// Errors raised while walking the route directory.
#[derive(Debug, Error)]
pub enum ScanError {
    /// A directory could not be listed.
    #[error("failed to list directory {}: {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// An entry could not be stat-inspected.
    #[error("failed to inspect {}: {source}", path.display())]
    Inspect {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Position of a kept entry within one directory listing.
enum Slot {
    File(PathBuf),
    Dir,
}

/// Walks a route directory tree.
#[derive(Debug, Clone)]
pub struct Scanner {
    hidden_prefix: String,
    hidden_dirs: HiddenDirPolicy,
    sort_entries: bool,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(&RouteDirectoryConfig::default())
    }
}

impl Scanner {
    /// Create a scanner using the hidden-entry and ordering settings of `config`.
    pub fn new(config: &RouteDirectoryConfig) -> Self {
        Self {
            hidden_prefix: config.hidden_prefix.clone(),
            hidden_dirs: config.hidden_dirs,
            sort_entries: config.sort_entries,
        }
    }

    /// Returns true if an entry with this file name is hidden.
    pub fn is_hidden(&self, name: &OsStr) -> bool {
        name.to_string_lossy().starts_with(&self.hidden_prefix)
    }

    /// List all route files below `root`.
    ///
    /// Returned paths are `root` joined with the relative path of each file.
    pub async fn scan(&self, root: &Path) -> Result<Vec<PathBuf>, ScanError> {
        let files = self.scan_dir(root.to_path_buf()).await?;
        tracing::debug!(root = %root.display(), files = files.len(), "Route directory scanned");
        Ok(files)
    }

    fn scan_dir(&self, dir: PathBuf) -> BoxFuture<'_, Result<Vec<PathBuf>, ScanError>> {
        async move {
            let mut names = list_dir(&dir).await?;
            if self.sort_entries {
                names.sort();
            }

            let mut slots = Vec::with_capacity(names.len());
            let mut subdirs = Vec::new();

            for name in names {
                let path = dir.join(&name);
                let hidden = self.is_hidden(&name);
                let metadata = tokio::fs::metadata(&path)
                    .await
                    .map_err(|source| ScanError::Inspect {
                        path: path.clone(),
                        source,
                    })?;

                if metadata.is_dir() {
                    if hidden && self.hidden_dirs == HiddenDirPolicy::Skip {
                        tracing::debug!(path = %path.display(), "Skipping hidden directory");
                        continue;
                    }
                    slots.push(Slot::Dir);
                    subdirs.push(self.scan_dir(path));
                } else if metadata.is_file() {
                    if !hidden {
                        slots.push(Slot::File(path));
                    }
                } else {
                    tracing::debug!(path = %path.display(), "Skipping non-regular file");
                }
            }

            let mut nested = try_join_all(subdirs).await?.into_iter();
            let mut files = Vec::new();
            for slot in slots {
                match slot {
                    Slot::File(path) => files.push(path),
                    Slot::Dir => files.extend(nested.next().unwrap_or_default()),
                }
            }
            Ok(files)
        }
        .boxed()
    }
}

async fn list_dir(dir: &Path) -> Result<Vec<std::ffi::OsString>, ScanError> {
    let read_err = |source| ScanError::ReadDir {
        path: dir.to_path_buf(),
        source,
    };

    let mut entries = tokio::fs::read_dir(dir).await.map_err(read_err)?;
    let mut names = Vec::new();
    while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
        names.push(entry.file_name());
    }
    Ok(names)
}
