//! File record metadata handlers.
//!
//! These routes expose record metadata only. The bytes themselves are served
//! by the download interceptor on `GET files/download/:id`, which is
//! deliberately not a registered route (see [`crate::api::intercept`]).

use crate::api::AppState;
use crate::types::FileId;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// GET /files - List file record metadata, newest first
#[utoipa::path(
    get,
    path = "/files",
    tag = "files",
    responses(
        (status = 200, description = "List of all file records", body = Vec<crate::types::FileInfo>),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn list_files(State(state): State<AppState>) -> Response {
    match state.gateway.list_files().await {
        Ok(files) => (StatusCode::OK, Json(files)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list file records");
            e.into_response()
        }
    }
}

/// GET /files/:id - Get metadata for a single file record
#[utoipa::path(
    get,
    path = "/files/{id}",
    tag = "files",
    params(
        ("id" = i64, Path, description = "File record ID")
    ),
    responses(
        (status = 200, description = "File record metadata", body = crate::types::FileInfo),
        (status = 404, description = "File record not found", body = crate::error::ApiError),
        (status = 500, description = "Internal server error", body = crate::error::ApiError)
    )
)]
pub async fn get_file(State(state): State<AppState>, Path(id): Path<i64>) -> Response {
    match state.gateway.file_info(FileId(id)).await {
        Ok(info) => (StatusCode::OK, Json(info)).into_response(),
        Err(e) => e.into_response(),
    }
}
