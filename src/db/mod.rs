//! Database layer for filegate
//!
//! Handles SQLite persistence for file records.
//!
//! ## Submodules
//!
//! Methods on [`Database`] are organized by domain:
//! - [`migrations`] — Database lifecycle, schema migrations
//! - [`files`] — File record CRUD

use crate::types::{FileId, FileInfo};
use sqlx::{FromRow, sqlite::SqlitePool};

mod files;
mod migrations;

/// New file record to be inserted into the database
#[derive(Debug, Clone)]
pub struct NewFileRecord {
    /// Original filename as supplied by the uploader
    pub original_filename: String,
    /// Internal storage name locating the bytes under the files root
    pub archive_filename: String,
    /// Browser-safe MIME type for Content-Type
    pub mime_browser: String,
    /// File size in bytes
    pub size_bytes: i64,
}

/// File record from database
#[derive(Debug, Clone, FromRow)]
pub struct FileRecord {
    /// Unique database ID
    pub id: i64,
    /// Original filename as supplied by the uploader
    pub original_filename: String,
    /// Internal storage name locating the bytes under the files root
    pub archive_filename: String,
    /// Browser-safe MIME type for Content-Type
    pub mime_browser: String,
    /// File size in bytes
    pub size_bytes: i64,
    /// Unix timestamp when the record was created
    pub created_at: i64,
}

impl From<FileRecord> for FileInfo {
    fn from(record: FileRecord) -> Self {
        use chrono::{TimeZone, Utc};

        FileInfo {
            id: FileId(record.id),
            original_filename: record.original_filename,
            mime_browser: record.mime_browser,
            size_bytes: record.size_bytes.max(0) as u64,
            created_at: Utc
                .timestamp_opt(record.created_at, 0)
                .single()
                .unwrap_or_else(Utc::now),
        }
    }
}

/// Database handle for filegate
pub struct Database {
    pool: SqlitePool,
}

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests;
