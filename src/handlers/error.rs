//! HTTP error responses
//!
//! Every failure leaves the service as `{"error": "...", "details"?: "..."}`.
//! Rule violations keep their own message at 400/404; anything else is a 500
//! carrying the action that failed plus the underlying message as `details`.

use axum::{
    extract::{rejection::JsonRejection, FromRequest},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::utils::errors::EventHubError;
use crate::utils::logging::log_store_failure;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    details: Option<String>,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn bad_request(error: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error)
    }

    pub fn not_found(error: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error)
    }

    pub fn event_not_found() -> Self {
        Self::not_found("Event not found")
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.error
    }

    /// Map an error raised while performing `action` (e.g. "Failed to register")
    pub fn from_store(action: &str, err: EventHubError) -> Self {
        match err {
            EventHubError::InvalidInput(message) => Self::bad_request(message),
            EventHubError::EventNotFound { .. } => Self::event_not_found(),
            EventHubError::UserNotFound => Self::not_found("User not found"),
            EventHubError::PastEvent
            | EventHubError::EventFull
            | EventHubError::AlreadyRegistered
            | EventHubError::NotRegistered => Self::bad_request(err.to_string()),
            EventHubError::UniqueViolation { field } if field == "email" => {
                Self::bad_request("Email already exists")
            }
            EventHubError::UniqueViolation { field } => Self::bad_request(format!("{field} already exists")),
            other => {
                log_store_failure(action, &other);
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, action).with_details(other.to_string())
            }
        }
    }

    /// `map_err` adapter for [`ApiError::from_store`]
    pub fn failed(action: &'static str) -> impl Fn(EventHubError) -> ApiError {
        move |err| Self::from_store(action, err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.error,
            details: self.details,
        };

        (self.status, Json(body)).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::bad_request("Invalid JSON body").with_details(rejection.body_text())
    }
}

/// Router fallback for paths that no route matches
pub async fn route_not_found() -> ApiError {
    ApiError::not_found("Not found")
}

/// `Json` extractor whose rejections use the API error envelope
#[derive(Debug, FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct JsonBody<T>(pub T);
