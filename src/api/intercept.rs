//! Pre-dispatch download interception
//!
//! Stored files are kept on disk under internal archive names; serving them
//! through an ordinary route would leak those names into the browser's save
//! dialog. Instead, `GET files/download/:id` is deliberately **not**
//! registered on the router. This middleware observes every request before
//! dispatch, claims that one route, and answers it entirely by itself:
//! record lookup, headers carrying the original filename, and a streamed
//! body. Every other request passes through untouched.

use crate::api::AppState;
use crate::error::Error;
use crate::types::FileId;
use crate::{headers, url};
use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio_util::io::ReaderStream;

/// Middleware claiming the download route before dispatch
///
/// Activates only for GET requests whose path matches
/// [`url::match_download`]. A claimed request never reaches dispatch — the
/// response is produced here, success or failure. Authorization runs inside
/// [`FileGateway::open_download`](crate::FileGateway::open_download) via the
/// injected access policy, and the API-key middleware (when configured) is
/// layered outside this one, so both checks precede any file bytes.
pub async fn download_interceptor(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if request.method() != Method::GET {
        return next.run(request).await;
    }

    let raw_id = match url::match_download(request.uri().path()) {
        Some(raw) => raw.to_string(),
        None => return next.run(request).await,
    };

    // The route is claimed from here on: dispatch is never reached for this
    // controller/action pair, found or not.
    let id = match raw_id.parse::<i64>() {
        Ok(id) => FileId(id),
        Err(_) => {
            tracing::warn!(raw_id = %raw_id, "Download request with malformed file id");
            return Error::NotFound(format!("file {raw_id}")).into_response();
        }
    };

    match serve_attachment(&state, id).await {
        Ok(response) => response,
        Err(e) => {
            match &e {
                Error::FileNotFound { .. } => {
                    tracing::debug!(file_id = id.get(), "Download requested for unknown file")
                }
                Error::Forbidden { .. } => {
                    tracing::warn!(file_id = id.get(), "Download denied by access policy")
                }
                other => {
                    tracing::error!(file_id = id.get(), error = %other, "Failed to serve download")
                }
            }
            e.into_response()
        }
    }
}

/// Build the streamed attachment response for a file
async fn serve_attachment(state: &AppState, id: FileId) -> crate::Result<Response> {
    let attachment = state.gateway.open_download(id).await?;

    let stream = ReaderStream::new(attachment.file);
    let body = Body::from_stream(stream);

    let response = Response::builder()
        .status(StatusCode::OK)
        .header(
            header::CONTENT_TYPE,
            headers::content_type(&attachment.record.mime_browser),
        )
        .header(
            header::CONTENT_DISPOSITION,
            headers::content_disposition(&attachment.record.original_filename),
        )
        .header(header::CONTENT_LENGTH, attachment.len)
        .body(body)
        .map_err(|e| Error::ApiServerError(format!("Failed to build download response: {e}")))?;

    tracing::info!(
        file_id = id.get(),
        filename = %attachment.record.original_filename,
        size_bytes = attachment.len,
        "Serving file download"
    );

    Ok(response)
}
