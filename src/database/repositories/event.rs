//! Event repository implementation

use sqlx::PgPool;
use chrono::{DateTime, Utc};
use uuid::Uuid;
use crate::models::event::{Event, CreateEventRequest};
use crate::utils::errors::EventHubError;
use crate::utils::helpers::generate_id;

#[derive(Clone, Debug)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, EventHubError> {
        let now = Utc::now();
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (id, title, date_time, location, capacity, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, title, date_time, location, capacity, created_at, updated_at
            "#
        )
        .bind(generate_id())
        .bind(request.title)
        .bind(request.date_time)
        .bind(request.location)
        .bind(request.capacity)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Event>, EventHubError> {
        let event = sqlx::query_as::<_, Event>(
            "SELECT id, title, date_time, location, capacity, created_at, updated_at FROM events WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Get events starting strictly after `now`, soonest first, ties by location
    pub async fn get_upcoming_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>, EventHubError> {
        let events = sqlx::query_as::<_, Event>(
            r#"
            SELECT id, title, date_time, location, capacity, created_at, updated_at
            FROM events
            WHERE date_time > $1
            ORDER BY date_time ASC, location ASC
            "#
        )
        .bind(now)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }
}
