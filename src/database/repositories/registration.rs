//! Registration repository implementation
//!
//! Registrations are the join between events and users. Registering runs the
//! eligibility rules and the insert inside one transaction with the event row
//! locked, so concurrent requests for the same event are serialized and the
//! capacity can never be exceeded.

use sqlx::PgPool;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::models::event::Event;
use crate::models::registration::Registration;
use crate::models::user::UserSummary;
use crate::services::registration::check_eligibility;
use crate::utils::errors::EventHubError;

const PRIMARY_KEY: &str = "registrations_pkey";

#[derive(Clone, Debug)]
pub struct RegistrationRepository {
    pool: PgPool,
}

impl RegistrationRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register `candidate` for the event, enforcing every registration rule
    pub async fn register(
        &self,
        event_id: Uuid,
        candidate: Option<Uuid>,
        now: DateTime<Utc>,
    ) -> Result<Registration, EventHubError> {
        let mut tx = self.pool.begin().await?;

        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, date_time, location, capacity, created_at, updated_at FROM events WHERE id = $1 FOR UPDATE"
        )
        .bind(event_id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(EventHubError::EventNotFound { event_id })?;

        let registrants: Vec<Uuid> = sqlx::query_scalar(
            "SELECT user_id FROM registrations WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_all(&mut *tx)
        .await?;

        let user_exists = match candidate {
            Some(user_id) => {
                sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE id = $1)")
                    .bind(user_id)
                    .fetch_one(&mut *tx)
                    .await?
            }
            None => false,
        };

        // Dropping `tx` on an early return rolls back and releases the lock
        let user_id = check_eligibility(&event, &registrants, candidate, user_exists, now)?;

        let registration = sqlx::query_as::<_, Registration>(
            r#"
            INSERT INTO registrations (event_id, user_id, registered_at)
            VALUES ($1, $2, $3)
            RETURNING event_id, user_id, registered_at
            "#
        )
        .bind(event_id)
        .bind(user_id)
        .bind(now)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match EventHubError::from_write(e, &[(PRIMARY_KEY, "registration")]) {
            EventHubError::UniqueViolation { .. } => EventHubError::AlreadyRegistered,
            other => other,
        })?;

        tx.commit().await?;

        Ok(registration)
    }

    /// Remove a registration; returns whether a row was deleted
    pub async fn unregister(&self, event_id: Uuid, user_id: Uuid) -> Result<bool, EventHubError> {
        let result = sqlx::query("DELETE FROM registrations WHERE event_id = $1 AND user_id = $2")
            .bind(event_id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Users registered for an event, in registration order
    pub async fn get_attendees(&self, event_id: Uuid) -> Result<Vec<UserSummary>, EventHubError> {
        let users = sqlx::query_as::<_, UserSummary>(
            r#"
            SELECT u.id, u.name, u.email
            FROM registrations r
            INNER JOIN users u ON u.id = r.user_id
            WHERE r.event_id = $1
            ORDER BY r.registered_at ASC, u.id ASC
            "#
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }

    /// Get registration count for event
    pub async fn count_for_event(&self, event_id: Uuid) -> Result<i64, EventHubError> {
        let count: (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM registrations WHERE event_id = $1"
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
