//! User model

use serde::{Deserialize, Serialize};
use serde_json::Value;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::{is_truthy, value_to_text};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Public projection of a user embedded in event details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
}

/// Raw `POST /events/user` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserPayload {
    pub name: Option<Value>,
    pub email: Option<Value>,
}

impl CreateUserPayload {
    pub fn validate(&self) -> Result<CreateUserRequest> {
        let missing = || EventHubError::InvalidInput("Name and email are required".to_string());

        if !is_truthy(self.name.as_ref()) || !is_truthy(self.email.as_ref()) {
            return Err(missing());
        }

        let name = self.name.as_ref().and_then(value_to_text).ok_or_else(missing)?;
        let email = self.email.as_ref().and_then(value_to_text).ok_or_else(missing)?;

        Ok(CreateUserRequest { name, email })
    }
}
