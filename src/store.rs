//! On-disk file storage access
//!
//! Stored bytes live under a single configured root directory, keyed by the
//! record's archive name. Archive names are produced by the host's storage
//! system, but they are still resolved defensively: absolute paths and
//! parent-directory components never escape the root.

use crate::error::{Result, StorageError};
use std::path::{Component, Path, PathBuf};

/// An opened stored file ready for streaming
#[derive(Debug)]
pub struct StoredFile {
    /// Open handle to the stored bytes
    pub file: tokio::fs::File,
    /// File length in bytes, taken at open time
    pub len: u64,
    /// The resolved on-disk path
    pub path: PathBuf,
}

/// Resolves archive names under the configured files root and opens them
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given directory
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The configured root directory
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve an archive name to its on-disk path
    ///
    /// Rejects names that would resolve outside the root: empty names,
    /// absolute paths, and any `.` / `..` components.
    pub fn resolve(&self, archive_filename: &str) -> Result<PathBuf> {
        if archive_filename.is_empty() {
            return Err(StorageError::InvalidName {
                name: archive_filename.to_string(),
                reason: "empty name".to_string(),
            }
            .into());
        }

        let relative = Path::new(archive_filename);
        for component in relative.components() {
            match component {
                Component::Normal(_) => {}
                Component::ParentDir | Component::CurDir => {
                    return Err(StorageError::InvalidName {
                        name: archive_filename.to_string(),
                        reason: "relative path component".to_string(),
                    }
                    .into());
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(StorageError::InvalidName {
                        name: archive_filename.to_string(),
                        reason: "absolute path".to_string(),
                    }
                    .into());
                }
            }
        }

        Ok(self.root.join(relative))
    }

    /// Open a stored file for streaming
    ///
    /// Returns the open handle together with its length so callers can set
    /// Content-Length without a second stat.
    pub async fn open(&self, archive_filename: &str) -> Result<StoredFile> {
        let path = self.resolve(archive_filename)?;

        let file = tokio::fs::File::open(&path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                StorageError::Missing { path: path.clone() }
            } else {
                StorageError::Unreadable {
                    path: path.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        let len = file
            .metadata()
            .await
            .map_err(|e| StorageError::Unreadable {
                path: path.clone(),
                reason: e.to_string(),
            })?
            .len();

        Ok(StoredFile { file, len, path })
    }
}
