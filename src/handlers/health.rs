//! Liveness and health endpoints

use axum::{extract::State, http::StatusCode, Json};
use serde_json::{json, Value};

use crate::handlers::{ApiError, AppState};

pub const LIVENESS_MESSAGE: &str = "Event Management API is running";

/// GET /
pub async fn liveness() -> &'static str {
    LIVENESS_MESSAGE
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    state.store.health_check().await.map_err(|e| {
        tracing::warn!(error = %e, "Health check failed");
        ApiError::new(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable").with_details(e.to_string())
    })?;

    Ok(Json(json!({ "status": "ok" })))
}
