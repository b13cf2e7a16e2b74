//! Serving stored uploads.

use axum::{
    body::Body,
    extract::{Path, Request, State},
    response::{IntoResponse, Response},
};
use tower::ServiceExt;
use tower_http::services::ServeFile;

use crate::http::error::ApiError;
use crate::http::server::AppState;

/// `GET /uploads/{filename}`: raw file bytes with a content type guessed from the extension.
pub async fn serve_upload(
    State(state): State<AppState>,
    Path(filename): Path<String>,
    request: Request,
) -> Result<Response, ApiError> {
    let path = state.uploads.resolve(&filename).ok_or(ApiError::FileNotFound)?;

    match ServeFile::new(path).oneshot(request).await {
        Ok(response) => Ok(response.map(Body::new).into_response()),
        Err(never) => match never {},
    }
}
