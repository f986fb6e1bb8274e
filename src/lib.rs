//! # filegate
//!
//! Embeddable download gateway that serves stored files under their
//! original names.
//!
//! Hosts that store uploads under internal (obfuscated) names keep a file
//! record per upload — original filename, storage name, browser-safe MIME
//! type. filegate intercepts `GET files/download/{id}` before dispatch, looks
//! the record up, and streams the stored bytes back with headers that restore
//! the original filename.
//!
//! ## Design Philosophy
//!
//! filegate is designed to be:
//! - **Library-first** - No CLI or UI, purely a Rust crate for embedding
//! - **Explicit about authorization** - Downloads pass an injected
//!   [`AccessPolicy`], never an assumed upstream check
//! - **Streaming** - File bytes go out in bounded chunks, never fully
//!   buffered in memory
//!
//! ## Quick Start
//!
//! ```no_run
//! use filegate::{Config, FileGateway};
//! use filegate::db::NewFileRecord;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let gateway = Arc::new(FileGateway::new(Config::default()).await?);
//!
//!     // Register a record for bytes the host already stored
//!     let id = gateway
//!         .register_file(NewFileRecord {
//!             original_filename: "annual report.pdf".into(),
//!             archive_filename: "7d9f2c4e8a1b.pdf".into(),
//!             mime_browser: "application/pdf".into(),
//!             size_bytes: 4096,
//!         })
//!         .await?;
//!
//!     println!("download at /{}", filegate::url::download_url(id));
//!
//!     // Serve the REST API (blocks until shutdown)
//!     filegate::api::start_api_server(gateway.clone(), gateway.config.clone()).await?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Database persistence layer
pub mod db;
/// Error types
pub mod error;
/// File gateway facade
pub mod gateway;
/// Download response header construction
pub mod headers;
/// Download authorization policy seam
pub mod policy;
/// On-disk file storage access
pub mod store;
/// Core types
pub mod types;
/// Canonical download URL handling
pub mod url;

// Re-export commonly used types
pub use config::{ApiConfig, Config, RateLimitConfig};
pub use db::Database;
pub use error::{
    ApiError, DatabaseError, Error, ErrorDetail, Result, StorageError, ToHttpStatus,
};
pub use gateway::{Attachment, FileGateway};
pub use policy::{AccessPolicy, AllowAll};
pub use store::FileStore;
pub use types::{FileId, FileInfo};

/// Helper function to run the gateway with graceful signal handling.
///
/// Waits for a termination signal and then calls the gateway's `shutdown()` method.
///
/// - **Unix:** listens for SIGTERM and SIGINT, with fallbacks if signal registration fails.
/// - **Windows/other:** listens for Ctrl+C via `tokio::signal::ctrl_c()`.
///
/// # Example
///
/// ```no_run
/// use filegate::{Config, FileGateway, run_with_shutdown};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let gateway = FileGateway::new(Config::default()).await?;
///
///     // Run with automatic signal handling
///     run_with_shutdown(gateway).await?;
///
///     Ok(())
/// }
/// ```
pub async fn run_with_shutdown(gateway: FileGateway) -> Result<()> {
    wait_for_signal().await;
    gateway.shutdown().await
}

#[cfg(unix)]
async fn wait_for_signal() {
    use tokio::signal::unix::{SignalKind, signal};

    // Set up signal handlers - these may fail in restricted environments (containers, tests)
    let sigterm_result = signal(SignalKind::terminate());
    let sigint_result = signal(SignalKind::interrupt());

    match (sigterm_result, sigint_result) {
        (Ok(mut sigterm), Ok(mut sigint)) => {
            tokio::select! {
                _ = sigterm.recv() => {
                    tracing::info!("Received SIGTERM signal");
                }
                _ = sigint.recv() => {
                    tracing::info!("Received SIGINT signal (Ctrl+C)");
                }
            }
        }
        (Err(e), _) => {
            tracing::warn!(error = %e, "Could not register SIGTERM handler, waiting for SIGINT only");
            if let Ok(mut sigint) = signal(SignalKind::interrupt()) {
                sigint.recv().await;
                tracing::info!("Received SIGINT signal (Ctrl+C)");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
        (_, Err(e)) => {
            tracing::warn!(error = %e, "Could not register SIGINT handler, waiting for SIGTERM only");
            if let Ok(mut sigterm) = signal(SignalKind::terminate()) {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM signal");
            } else {
                tracing::error!("Could not register any signal handlers, using ctrl_c fallback");
                tokio::signal::ctrl_c().await.ok();
            }
        }
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            tracing::info!("Received Ctrl+C signal");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C signal");
        }
    }
}
