//! Event handlers
//!
//! - POST /events                  create event
//! - GET  /events/upcoming         list future events
//! - GET  /events/:id              event with registered users
//! - POST /events/:id/register     register a user
//! - POST /events/:id/cancel       cancel a user's registration
//! - GET  /events/:id/stats        capacity usage

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use uuid::Uuid;

use crate::handlers::{error::JsonBody, ApiError, AppState};
use crate::models::{CreateEventPayload, Event, EventDetails, EventStats, RegistrationPayload};
use crate::utils::errors::EventHubError;
use crate::utils::logging::{log_record_created, log_registration_action, log_registration_rejected};

/// A malformed id can never name an event
fn parse_event_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw).ok()
}

/// Log rule violations before they are mapped to a response
fn rejected(event_id: Uuid, action: &'static str, failure: &'static str) -> impl Fn(EventHubError) -> ApiError {
    move |err| {
        if err.is_client_error() {
            log_registration_rejected(event_id, action, &err.to_string());
        }
        ApiError::from_store(failure, err)
    }
}

/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateEventPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    const FAILURE: &str = "Failed to create event";

    let request = payload.validate().map_err(ApiError::failed(FAILURE))?;
    let event = state
        .store
        .create_event(request)
        .await
        .map_err(ApiError::failed(FAILURE))?;

    log_record_created("events", event.id);
    Ok((StatusCode::CREATED, Json(json!({ "eventId": event.id }))))
}

/// GET /events/upcoming
pub async fn list_upcoming(State(state): State<AppState>) -> Result<Json<Vec<Event>>, ApiError> {
    state
        .store
        .upcoming_events(Utc::now())
        .await
        .map(Json)
        .map_err(ApiError::failed("Failed to list upcoming events"))
}

/// GET /events/:id
pub async fn get_event(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EventDetails>, ApiError> {
    let event_id = parse_event_id(&raw_id).ok_or_else(ApiError::event_not_found)?;

    state
        .store
        .event_details(event_id)
        .await
        .map_err(ApiError::failed("Failed to fetch event"))?
        .map(Json)
        .ok_or_else(ApiError::event_not_found)
}

/// POST /events/:id/register
pub async fn register(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(payload): JsonBody<RegistrationPayload>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    const FAILURE: &str = "Failed to register";

    let user_id = payload.user_id().map_err(ApiError::failed(FAILURE))?;
    let event_id = parse_event_id(&raw_id).ok_or_else(ApiError::event_not_found)?;

    let registration = state
        .store
        .register(event_id, user_id, Utc::now())
        .await
        .map_err(rejected(event_id, "register", FAILURE))?;

    log_registration_action(event_id, "register", registration.user_id);
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Registration successful" })),
    ))
}

/// POST /events/:id/cancel
pub async fn cancel(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    JsonBody(payload): JsonBody<RegistrationPayload>,
) -> Result<Json<Value>, ApiError> {
    const FAILURE: &str = "Failed to cancel registration";

    let user_id = payload.user_id().map_err(ApiError::failed(FAILURE))?;
    let event_id = parse_event_id(&raw_id).ok_or_else(ApiError::event_not_found)?;

    state
        .store
        .cancel(event_id, user_id)
        .await
        .map_err(rejected(event_id, "cancel", FAILURE))?;

    if let Some(user_id) = user_id {
        log_registration_action(event_id, "cancel", user_id);
    }
    Ok(Json(json!({ "message": "Registration cancelled" })))
}

/// GET /events/:id/stats
pub async fn stats(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<EventStats>, ApiError> {
    let event_id = parse_event_id(&raw_id).ok_or_else(ApiError::event_not_found)?;

    state
        .store
        .event_stats(event_id)
        .await
        .map_err(ApiError::failed("Failed to get event stats"))?
        .map(Json)
        .ok_or_else(ApiError::event_not_found)
}
