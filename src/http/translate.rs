//! Translation endpoint.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::http::error::ApiError;
use crate::http::server::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResponse {
    pub translated_text: String,
}

/// Pull `text` and `targetLanguage` out of the body.
///
/// Both keys must be present. A non-string language is never a supported
/// code; a non-string text cannot be sent to the provider.
fn required_fields(body: &Value) -> Result<(&str, &str), ApiError> {
    let (Some(text), Some(target)) = (body.get("text"), body.get("targetLanguage")) else {
        return Err(ApiError::MissingTranslateFields);
    };
    let target = target.as_str().ok_or(ApiError::UnsupportedLanguage)?;
    let text = text.as_str().ok_or_else(|| {
        ApiError::TranslationFailed("Translation failed: 'text' must be a string".into())
    })?;
    Ok((text, target))
}

/// `POST /translate` with `{"text": ..., "targetLanguage": ...}`.
pub async fn translate(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<TranslateResponse>, ApiError> {
    let Ok(Json(body)) = body else {
        return Err(ApiError::MissingTranslateFields);
    };
    let (text, target) = required_fields(&body)?;

    let translated_text = state
        .translator
        .translate_checked(text, target)
        .await
        .inspect_err(|e| tracing::warn!(target_language = %target, error = %e, "Translation rejected"))?;

    Ok(Json(TranslateResponse { translated_text }))
}
