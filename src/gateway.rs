//! File gateway facade
//!
//! [`FileGateway`] ties the pieces together: the file record database, the
//! on-disk store, and the access policy. The API layer and embedding hosts
//! talk to this facade instead of reaching into individual components.

use crate::config::Config;
use crate::db::{Database, FileRecord, NewFileRecord};
use crate::error::{Error, Result};
use crate::policy::{AccessPolicy, AllowAll};
use crate::store::FileStore;
use crate::types::{FileId, FileInfo};
use std::sync::Arc;

/// A file record paired with its opened bytes, ready to stream to a client
#[derive(Debug)]
pub struct Attachment {
    /// The file record backing this download
    pub record: FileRecord,
    /// Open handle to the stored bytes
    pub file: tokio::fs::File,
    /// Length of the stored bytes, for Content-Length
    pub len: u64,
}

/// The main gateway instance
///
/// Owns the database, the file store, and the access policy. Cheap to share
/// behind an [`Arc`]; all methods take `&self`.
pub struct FileGateway {
    /// Database instance for file record persistence
    /// Public so embedding hosts can manage records directly
    pub db: Arc<Database>,
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub config: Arc<Config>,
    /// On-disk store resolving archive names under the files root
    pub(crate) store: FileStore,
    /// Download authorization policy
    pub(crate) policy: Arc<dyn AccessPolicy>,
}

impl FileGateway {
    /// Create a new FileGateway instance
    ///
    /// Initializes the core components: ensures the files root directory
    /// exists, opens/creates the SQLite database, and runs migrations.
    /// Downloads are authorized by [`AllowAll`]; use [`with_policy`] to embed
    /// a host-specific policy.
    ///
    /// [`with_policy`]: FileGateway::with_policy
    pub async fn new(config: Config) -> Result<Self> {
        Self::with_policy(config, Arc::new(AllowAll)).await
    }

    /// Create a new FileGateway with an explicit access policy
    pub async fn with_policy(config: Config, policy: Arc<dyn AccessPolicy>) -> Result<Self> {
        // Ensure the files root exists
        tokio::fs::create_dir_all(config.files_root())
            .await
            .map_err(|e| {
                Error::Io(std::io::Error::new(
                    e.kind(),
                    format!(
                        "Failed to create files root '{}': {}",
                        config.files_root().display(),
                        e
                    ),
                ))
            })?;

        // Initialize database
        let db = Database::new(config.database_path()).await?;

        let store = FileStore::new(config.files_root());

        Ok(Self {
            db: Arc::new(db),
            config: Arc::new(config),
            store,
            policy,
        })
    }

    /// Open a file for download
    ///
    /// Runs the full serving sequence: policy check, record lookup, disk
    /// open. The returned [`Attachment`] carries everything the response
    /// needs — record metadata for the headers and an open handle for the
    /// streamed body.
    pub async fn open_download(&self, id: FileId) -> Result<Attachment> {
        if !self.policy.allow_download(id).await {
            return Err(Error::Forbidden { id: id.get() });
        }

        let record = self
            .db
            .get_file(id)
            .await?
            .ok_or(Error::FileNotFound { id: id.get() })?;

        let stored = self.store.open(&record.archive_filename).await.map_err(|e| {
            // A record without its bytes means the database and the files
            // root have diverged; surface loudly before mapping the error.
            tracing::error!(
                file_id = id.get(),
                archive = %record.archive_filename,
                error = %e,
                "Stored bytes unavailable for existing file record"
            );
            e
        })?;

        Ok(Attachment {
            record,
            file: stored.file,
            len: stored.len,
        })
    }

    /// Get metadata for a single file record
    pub async fn file_info(&self, id: FileId) -> Result<FileInfo> {
        let record = self
            .db
            .get_file(id)
            .await?
            .ok_or(Error::FileNotFound { id: id.get() })?;

        Ok(record.into())
    }

    /// List metadata for all file records, newest first
    pub async fn list_files(&self) -> Result<Vec<FileInfo>> {
        let records = self.db.list_files().await?;
        Ok(records.into_iter().map(Into::into).collect())
    }

    /// Register a file record for bytes the host has already stored
    ///
    /// Record lifecycle belongs to the embedding host's storage system; this
    /// is the library entry point for it. The archive name is validated
    /// against the files root before the record is written.
    pub async fn register_file(&self, file: NewFileRecord) -> Result<FileId> {
        self.store.resolve(&file.archive_filename)?;

        let id = self.db.insert_file(&file).await?;
        tracing::info!(
            file_id = id.get(),
            original = %file.original_filename,
            archive = %file.archive_filename,
            "Registered file record"
        );

        Ok(id)
    }

    /// Remove a file record
    ///
    /// Only the record is removed; the host owns the bytes on disk.
    pub async fn remove_file(&self, id: FileId) -> Result<()> {
        if !self.db.delete_file(id).await? {
            return Err(Error::FileNotFound { id: id.get() });
        }

        tracing::info!(file_id = id.get(), "Removed file record");
        Ok(())
    }

    /// Spawn the REST API server in a background task
    ///
    /// The server runs concurrently with the embedding host and listens on
    /// the configured bind address (default: 127.0.0.1:6780).
    pub fn spawn_api_server(self: &Arc<Self>) -> tokio::task::JoinHandle<Result<()>> {
        let gateway = self.clone();
        let config = self.config.clone();

        tokio::spawn(async move { crate::api::start_api_server(gateway, config).await })
    }

    /// Shut down the gateway, closing database connections
    pub async fn shutdown(&self) -> Result<()> {
        tracing::info!("Shutting down file gateway");
        self.db.close().await;
        Ok(())
    }
}
