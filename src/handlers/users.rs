//! User handlers

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::handlers::{error::JsonBody, ApiError, AppState};
use crate::models::CreateUserPayload;
use crate::utils::logging::log_record_created;

/// POST /events/user
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateUserPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    const FAILURE: &str = "Failed to create user";

    let request = payload.validate().map_err(ApiError::failed(FAILURE))?;
    let user = state
        .store
        .create_user(request)
        .await
        .map_err(ApiError::failed(FAILURE))?;

    log_record_created("users", user.id);
    Ok((StatusCode::CREATED, Json(json!({ "userId": user.id }))))
}
