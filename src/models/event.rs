//! Event model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::models::user::UserSummary;
use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::{coerce_number, is_truthy, parse_timestamp, value_to_text};

/// Smallest capacity an event may be created with
pub const MIN_CAPACITY: i32 = 1;
/// Largest capacity an event may be created with
pub const MAX_CAPACITY: i32 = 1000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Upcoming means strictly after `now`
    pub fn is_upcoming(&self, now: DateTime<Utc>) -> bool {
        self.date_time > now
    }
}

/// An event together with the users registered for it
#[derive(Debug, Clone, Serialize)]
pub struct EventDetails {
    #[serde(flatten)]
    pub event: Event,
    pub users: Vec<UserSummary>,
}

/// Capacity usage for a single event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    pub total_registrations: i64,
    pub remaining_capacity: i64,
    pub percent_used: f64,
}

/// Validated input for inserting an event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub capacity: i32,
}

/// Raw `POST /events` body. Fields stay loosely typed so that missing,
/// falsy and mistyped values can be reported with the API's own messages.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateEventPayload {
    pub title: Option<Value>,
    pub date_time: Option<Value>,
    pub location: Option<Value>,
    pub capacity: Option<Value>,
}

impl CreateEventPayload {
    pub fn validate(&self) -> Result<CreateEventRequest> {
        let required = [&self.title, &self.date_time, &self.location, &self.capacity];
        if !required.iter().all(|field| is_truthy(field.as_ref())) {
            return Err(EventHubError::InvalidInput("All fields are required.".to_string()));
        }

        let capacity = self
            .capacity
            .as_ref()
            .and_then(coerce_number)
            .and_then(parse_capacity)
            .ok_or_else(|| {
                EventHubError::InvalidInput(format!(
                    "Capacity must be a number between {MIN_CAPACITY} and {MAX_CAPACITY}."
                ))
            })?;

        let (title, location) = match (
            self.title.as_ref().and_then(value_to_text),
            self.location.as_ref().and_then(value_to_text),
        ) {
            (Some(title), Some(location)) => (title, location),
            _ => {
                return Err(EventHubError::InvalidInput(
                    "title and location must be text.".to_string(),
                ))
            }
        };

        let date_time = self
            .date_time
            .as_ref()
            .and_then(parse_timestamp)
            .ok_or_else(|| EventHubError::InvalidInput("date_time must be a valid date.".to_string()))?;

        Ok(CreateEventRequest {
            title,
            date_time,
            location,
            capacity,
        })
    }
}

/// Accept only whole numbers inside the allowed range
fn parse_capacity(value: f64) -> Option<i32> {
    if value.fract() != 0.0 {
        return None;
    }
    if value < f64::from(MIN_CAPACITY) || value > f64::from(MAX_CAPACITY) {
        return None;
    }
    Some(value as i32)
}
