//! File record CRUD operations.

use crate::error::DatabaseError;
use crate::types::FileId;
use crate::{Error, Result};

use super::{Database, FileRecord, NewFileRecord};

impl Database {
    /// Insert a new file record
    pub async fn insert_file(&self, file: &NewFileRecord) -> Result<FileId> {
        let now = chrono::Utc::now().timestamp();

        let result = sqlx::query(
            r#"
            INSERT INTO files (
                original_filename, archive_filename, mime_browser,
                size_bytes, created_at
            ) VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&file.original_filename)
        .bind(&file.archive_filename)
        .bind(&file.mime_browser)
        .bind(file.size_bytes)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to insert file record: {}",
                e
            )))
        })?;

        Ok(FileId(result.last_insert_rowid()))
    }

    /// Get a file record by ID
    pub async fn get_file(&self, id: FileId) -> Result<Option<FileRecord>> {
        let row = sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT
                id, original_filename, archive_filename, mime_browser,
                size_bytes, created_at
            FROM files
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to get file record: {}",
                e
            )))
        })?;

        Ok(row)
    }

    /// List all file records, newest first
    pub async fn list_files(&self) -> Result<Vec<FileRecord>> {
        let rows = sqlx::query_as::<_, FileRecord>(
            r#"
            SELECT
                id, original_filename, archive_filename, mime_browser,
                size_bytes, created_at
            FROM files
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            Error::Database(DatabaseError::QueryFailed(format!(
                "Failed to list file records: {}",
                e
            )))
        })?;

        Ok(rows)
    }

    /// Delete a file record
    ///
    /// Returns whether a record was actually removed.
    pub async fn delete_file(&self, id: FileId) -> Result<bool> {
        let result = sqlx::query("DELETE FROM files WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                Error::Database(DatabaseError::QueryFailed(format!(
                    "Failed to delete file record: {}",
                    e
                )))
            })?;

        Ok(result.rows_affected() > 0)
    }
}
