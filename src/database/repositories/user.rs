//! User repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::user::{User, CreateUserRequest};
use crate::utils::errors::EventHubError;
use crate::utils::helpers::generate_id;

/// Constraint names on `users` and the column each one guards
const UNIQUE_FIELDS: &[(&str, &str)] = &[("users_email_key", "email"), ("users_pkey", "id")];

#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new user; a taken email yields `UniqueViolation { field: "email" }`
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, EventHubError> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, name, email, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, name, email, created_at, updated_at
            "#
        )
        .bind(generate_id())
        .bind(request.name)
        .bind(request.email)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| EventHubError::from_write(e, UNIQUE_FIELDS))?;

        Ok(user)
    }
}
