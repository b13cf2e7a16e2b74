//! FAQ CRUD handlers.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::form::FaqForm;
use crate::http::server::AppState;
use crate::store::{FaqPatch, FaqRecord};

/// Parse the `{id}` segment; anything but plain ASCII digits is an unknown route.
fn faq_id(path: Result<Path<String>, PathRejection>) -> Result<u64, ApiError> {
    let Ok(Path(raw)) = path else {
        return Err(ApiError::RouteNotFound);
    };
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ApiError::RouteNotFound);
    }
    raw.parse().map_err(|_| ApiError::RouteNotFound)
}

pub async fn list_faqs(State(state): State<AppState>) -> Json<Vec<FaqRecord>> {
    Json(state.store.list_all())
}

pub async fn get_faq(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<FaqRecord>, ApiError> {
    let id = faq_id(path)?;
    Ok(Json(state.store.get(id)?))
}

pub async fn create_faq(
    State(state): State<AppState>,
    form: FaqForm,
) -> Result<(StatusCode, Json<FaqRecord>), ApiError> {
    let question = form.question().ok_or(ApiError::MissingQuestion)?.to_string();

    let image = match &form.image {
        Some(upload) => Some(state.uploads.save(&upload.filename, &upload.bytes).await?),
        None => None,
    };

    let answer = form.answer.filter(|a| !a.is_empty());
    let record = state.store.create(question, answer, image)?;
    Ok((StatusCode::CREATED, Json(record)))
}

pub async fn update_faq(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    form: FaqForm,
) -> Result<Json<FaqRecord>, ApiError> {
    let id = faq_id(path)?;
    // Nothing touches the filesystem for an unknown id. A delete racing the
    // save below can still leave an orphaned file; `update` then answers 404.
    if !state.store.contains(id) {
        return Err(ApiError::FaqNotFound);
    }

    let image = match &form.image {
        Some(upload) => Some(state.uploads.save(&upload.filename, &upload.bytes).await?),
        None => None,
    };

    let patch = FaqPatch {
        question: form.question,
        answer: form.answer,
        image,
    };
    Ok(Json(state.store.update(id, patch)?))
}

pub async fn delete_faq(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Value>, ApiError> {
    let id = faq_id(path)?;
    let result = state.store.delete(id)?;
    Ok(Json(json!({ "result": result })))
}
