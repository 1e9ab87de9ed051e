//! Database service layer
//!
//! This module provides a high-level interface to database operations

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::database::{connection, DatabasePool, EventRepository, EventStore, RegistrationRepository, UserRepository};
use crate::models::*;
use crate::utils::errors::{EventHubError, Result};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub events: EventRepository,
    pub users: UserRepository,
    pub registrations: RegistrationRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            registrations: RegistrationRepository::new(pool.clone()),
            pool,
        }
    }
}

#[async_trait]
impl EventStore for DatabaseService {
    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        self.events.create(request).await
    }

    async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>> {
        self.events.get_upcoming_events(now).await
    }

    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>> {
        self.events.find_by_id(event_id).await
    }

    async fn event_attendees(&self, event_id: Uuid) -> Result<Vec<UserSummary>> {
        self.registrations.get_attendees(event_id).await
    }

    async fn registration_count(&self, event_id: Uuid) -> Result<i64> {
        self.registrations.count_for_event(event_id).await
    }

    async fn register(&self, event_id: Uuid, user_id: Option<Uuid>, now: DateTime<Utc>) -> Result<Registration> {
        self.registrations.register(event_id, user_id, now).await
    }

    async fn cancel(&self, event_id: Uuid, user_id: Option<Uuid>) -> Result<()> {
        if self.events.find_by_id(event_id).await?.is_none() {
            return Err(EventHubError::EventNotFound { event_id });
        }

        let Some(user_id) = user_id else {
            return Err(EventHubError::NotRegistered);
        };

        if !self.registrations.unregister(event_id, user_id).await? {
            return Err(EventHubError::NotRegistered);
        }

        Ok(())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.users.create(request).await
    }

    async fn health_check(&self) -> Result<()> {
        connection::health_check(&self.pool).await
    }
}
