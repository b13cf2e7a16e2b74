//! Mapping of domain errors to HTTP responses.
//!
//! Every error leaves the service as `{"error": <message>}` with a fixed status.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;
use crate::translation::TranslateError;
use crate::uploads::UploadError;

/// Errors surfaced at the HTTP boundary.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("FAQ not found")]
    FaqNotFound,

    #[error("Bad request, 'question' is required")]
    MissingQuestion,

    #[error("Bad request, 'text' and 'targetLanguage' are required")]
    MissingTranslateFields,

    #[error("Unsupported target language")]
    UnsupportedLanguage,

    /// Provider failure; the message is returned to the client verbatim.
    #[error("{0}")]
    TranslationFailed(String),

    #[error("Bad request, invalid image filename")]
    InvalidFilename,

    #[error("Bad request, {0}")]
    MalformedForm(String),

    #[error("File not found")]
    FileNotFound,

    /// Path did not match any route parameter shape (e.g. `/faqs/abc`).
    #[error("Not found")]
    RouteNotFound,

    #[error("Failed to store uploaded image")]
    Storage,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::FaqNotFound | ApiError::FileNotFound | ApiError::RouteNotFound => {
                StatusCode::NOT_FOUND
            }
            ApiError::MissingQuestion
            | ApiError::MissingTranslateFields
            | ApiError::UnsupportedLanguage
            | ApiError::InvalidFilename
            | ApiError::MalformedForm(_) => StatusCode::BAD_REQUEST,
            ApiError::TranslationFailed(_) | ApiError::Storage => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.to_string() }))).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(_) => ApiError::FaqNotFound,
            StoreError::Validation(_) => ApiError::MissingQuestion,
        }
    }
}

impl From<TranslateError> for ApiError {
    fn from(err: TranslateError) -> Self {
        match err {
            TranslateError::UnsupportedLanguage(_) => ApiError::UnsupportedLanguage,
            other => ApiError::TranslationFailed(other.to_string()),
        }
    }
}

impl From<UploadError> for ApiError {
    fn from(err: UploadError) -> Self {
        match err {
            UploadError::InvalidFilename(_) => ApiError::InvalidFilename,
            UploadError::Io(e) => {
                tracing::error!(error = %e, "Failed to write upload");
                ApiError::Storage
            }
        }
    }
}
