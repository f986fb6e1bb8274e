//! Error types for filegate
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error types (Database, Storage, Config)
//! - HTTP status code mapping for API integration
//! - Structured error responses with machine-readable error codes

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;
use utoipa::ToSchema;

/// Result type alias for filegate operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for filegate
///
/// This is the primary error type used throughout the library. Each variant
/// includes contextual information to help diagnose issues.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "files_root")
        key: Option<String>,
    },

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// SQLx database error
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    /// Storage-layer error (resolving or reading file bytes)
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// File record not found
    #[error("file {id} not found")]
    FileNotFound {
        /// The file ID that was not found
        id: i64,
    },

    /// Generic resource not found
    #[error("not found: {0}")]
    NotFound(String),

    /// Access policy denied the request
    #[error("access to file {id} denied")]
    Forbidden {
        /// The file ID the policy refused
        id: i64,
    },

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Database-related errors
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Failed to connect to database
    #[error("failed to connect to database: {0}")]
    ConnectionFailed(String),

    /// Failed to run migrations
    #[error("failed to run migrations: {0}")]
    MigrationFailed(String),

    /// Query failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Record not found
    #[error("record not found: {0}")]
    NotFound(String),

    /// Constraint violation (e.g., duplicate key)
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
}

/// Storage-layer errors (locating and reading stored file bytes)
#[derive(Debug, Error)]
pub enum StorageError {
    /// A storage name that cannot be resolved safely under the files root
    #[error("invalid storage name {name:?}: {reason}")]
    InvalidName {
        /// The offending storage name
        name: String,
        /// Why the name was rejected
        reason: String,
    },

    /// The record exists but the backing bytes are gone from disk
    #[error("stored file missing at {path}")]
    Missing {
        /// The resolved path where the bytes were expected
        path: PathBuf,
    },

    /// The stored file exists but could not be opened or read
    #[error("stored file unreadable at {path}: {reason}")]
    Unreadable {
        /// The resolved path of the unreadable file
        path: PathBuf,
        /// The underlying I/O failure
        reason: String,
    },
}

/// API error response format
///
/// This structure is returned by API endpoints when an error occurs.
/// It follows a standard format with machine-readable error codes,
/// human-readable messages, and optional contextual details.
///
/// # Example JSON Response
///
/// ```json
/// {
///   "error": {
///     "code": "file_not_found",
///     "message": "file 123 not found",
///     "details": {
///       "file_id": 123
///     }
///   }
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiError {
    /// The error details
    pub error: ErrorDetail,
}

/// Detailed error information for API responses
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable error code (e.g., "file_not_found")
    ///
    /// Clients can use this for programmatic error handling.
    pub code: String,

    /// Human-readable error message
    ///
    /// This is suitable for displaying to end users.
    pub message: String,

    /// Optional additional context about the error
    ///
    /// This can include fields like file_id, resolved paths, etc.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Create a new API error with code and message
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: None,
            },
        }
    }

    /// Create an API error with additional details
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            error: ErrorDetail {
                code: code.into(),
                message: message.into(),
                details: Some(details),
            },
        }
    }

    /// Create a "not found" error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new("not_found", format!("{} not found", resource.into()))
    }

    /// Create an "internal server error"
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new("internal_error", message)
    }

    /// Create an "unauthorized" error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new("unauthorized", message)
    }
}

/// Convert errors to HTTP status codes for API responses
///
/// This trait maps domain errors to appropriate HTTP status codes.
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::Config { .. } => 400,

            // 403 Forbidden - Policy refused the request
            Error::Forbidden { .. } => 403,

            // 404 Not Found
            Error::FileNotFound { .. } => 404,
            Error::NotFound(_) => 404,
            Error::Storage(StorageError::Missing { .. }) => 404,

            // 422 Unprocessable Entity - Semantic errors
            Error::Storage(StorageError::InvalidName { .. }) => 422,

            // 500 Internal Server Error - Server-side issues
            Error::Database(_) => 500,
            Error::Sqlx(_) => 500,
            Error::Storage(StorageError::Unreadable { .. }) => 500,
            Error::Io(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Serialization(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::Config { .. } => "config_error",
            Error::Database(_) => "database_error",
            Error::Sqlx(_) => "database_error",
            Error::Storage(e) => match e {
                StorageError::InvalidName { .. } => "invalid_archive_name",
                StorageError::Missing { .. } => "archive_missing",
                StorageError::Unreadable { .. } => "storage_error",
            },
            Error::Io(_) => "io_error",
            Error::FileNotFound { .. } => "file_not_found",
            Error::NotFound(_) => "not_found",
            Error::Forbidden { .. } => "forbidden",
            Error::ApiServerError(_) => "api_server_error",
            Error::Serialization(_) => "serialization_error",
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let code = error.error_code().to_string();
        let message = error.to_string();

        // Add contextual details for specific error types
        let details = match &error {
            Error::FileNotFound { id } => Some(serde_json::json!({
                "file_id": id,
            })),
            Error::Forbidden { id } => Some(serde_json::json!({
                "file_id": id,
            })),
            Error::Storage(StorageError::Missing { path }) => Some(serde_json::json!({
                "path": path,
            })),
            Error::Storage(StorageError::InvalidName { name, .. }) => Some(serde_json::json!({
                "name": name,
            })),
            _ => None,
        };

        ApiError {
            error: ErrorDetail {
                code,
                message,
                details,
            },
        }
    }
}
