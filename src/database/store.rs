//! The storage seam used by the HTTP handlers

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{CreateEventRequest, CreateUserRequest, Event, EventDetails, EventStats, Registration, User, UserSummary};
use crate::services::registration::compute_stats;
use crate::utils::errors::Result;

/// Persistence operations for events, users and registrations.
///
/// Implementations report rule violations with the typed
/// [`EventHubError`](crate::utils::errors::EventHubError) variants
/// (`EventNotFound`, `EventFull`, `UniqueViolation`, ...).
#[async_trait]
pub trait EventStore: Send + Sync {
    async fn create_event(&self, request: CreateEventRequest) -> Result<Event>;

    async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>>;

    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>>;

    async fn event_attendees(&self, event_id: Uuid) -> Result<Vec<UserSummary>>;

    async fn registration_count(&self, event_id: Uuid) -> Result<i64>;

    /// Register a user atomically: either every rule passes and the row is
    /// written, or nothing changes.
    async fn register(&self, event_id: Uuid, user_id: Option<Uuid>, now: DateTime<Utc>) -> Result<Registration>;

    /// Delete the registration for the pair. Fails with `EventNotFound` or
    /// `NotRegistered`.
    async fn cancel(&self, event_id: Uuid, user_id: Option<Uuid>) -> Result<()>;

    async fn create_user(&self, request: CreateUserRequest) -> Result<User>;

    async fn health_check(&self) -> Result<()>;

    async fn event_details(&self, event_id: Uuid) -> Result<Option<EventDetails>> {
        let Some(event) = self.find_event(event_id).await? else {
            return Ok(None);
        };
        let users = self.event_attendees(event_id).await?;
        Ok(Some(EventDetails { event, users }))
    }

    async fn event_stats(&self, event_id: Uuid) -> Result<Option<EventStats>> {
        let Some(event) = self.find_event(event_id).await? else {
            return Ok(None);
        };
        let total = self.registration_count(event_id).await?;
        Ok(Some(compute_stats(event.capacity, total)))
    }
}
