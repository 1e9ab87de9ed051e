//! Registration model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::is_truthy;

/// Join record: this user attends this event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Registration {
    pub event_id: Uuid,
    pub user_id: Uuid,
    pub registered_at: DateTime<Utc>,
}

/// Body of `POST /events/:id/register` and `POST /events/:id/cancel`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistrationPayload {
    #[serde(rename = "userId")]
    pub user_id: Option<Value>,
}

impl RegistrationPayload {
    /// Returns the requested user id, or `None` when the value is present
    /// but cannot name any user (not a UUID string).
    pub fn user_id(&self) -> Result<Option<Uuid>> {
        if !is_truthy(self.user_id.as_ref()) {
            return Err(EventHubError::InvalidInput("userId is required".to_string()));
        }

        Ok(self
            .user_id
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| Uuid::parse_str(s.trim()).ok()))
    }
}
