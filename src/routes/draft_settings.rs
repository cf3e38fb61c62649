use axum::{Json, Router, http::StatusCode, routing::post};
use serde_json::value::RawValue;

use crate::{error::AppError, extract::JsonBody, state::AppState};

/// Draft configuration router.
pub fn router() -> Router<AppState> {
    Router::new().route("/draft-settings", post(save_draft_settings))
}

/// `POST /draft-settings` — Accept draft settings and return them unchanged.
///
/// Settings are not persisted. The body must be a JSON object; it is sent back as the
/// exact text received, so key order and number precision survive.
async fn save_draft_settings(
    JsonBody(settings): JsonBody<Box<RawValue>>,
) -> Result<(StatusCode, Json<Box<RawValue>>), AppError> {
    if !settings.get().starts_with('{') {
        return Err(AppError::UnprocessableEntity(
            "Draft settings must be a JSON object".to_string(),
        ));
    }

    tracing::debug!(bytes = settings.get().len(), "Received draft settings");

    Ok((StatusCode::CREATED, Json(settings)))
}
