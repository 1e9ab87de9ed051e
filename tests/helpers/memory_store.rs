//! In-memory `EventStore` for driving the HTTP layer without Postgres
//!
//! Registration goes through the same `check_eligibility` rules as the
//! Postgres store; the whole check-and-insert runs under one lock.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use eventhub::models::{CreateEventRequest, CreateUserRequest, Event, Registration, User, UserSummary};
use eventhub::services::check_eligibility;
use eventhub::{EventHubError, EventStore, Result};

#[derive(Default)]
struct Tables {
    events: Vec<Event>,
    users: Vec<User>,
    registrations: Vec<Registration>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failure: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails like a dropped database connection
    pub fn failing(message: &str) -> Self {
        Self {
            tables: Mutex::default(),
            failure: Some(message.to_string()),
        }
    }

    fn check_available(&self) -> Result<()> {
        match &self.failure {
            Some(message) => Err(EventHubError::Database(sqlx::Error::Protocol(message.clone()))),
            None => Ok(()),
        }
    }

    pub fn event_count(&self) -> usize {
        self.tables.lock().unwrap().events.len()
    }

    pub fn registration_count_total(&self) -> usize {
        self.tables.lock().unwrap().registrations.len()
    }

    /// Insert an event directly, bypassing request validation
    pub fn insert_event(&self, event: Event) {
        self.tables.lock().unwrap().events.push(event);
    }
}

#[async_trait]
impl EventStore for MemoryStore {
    async fn create_event(&self, request: CreateEventRequest) -> Result<Event> {
        self.check_available()?;
        let now = Utc::now();
        let event = Event {
            id: Uuid::new_v4(),
            title: request.title,
            date_time: request.date_time,
            location: request.location,
            capacity: request.capacity,
            created_at: now,
            updated_at: now,
        };
        self.tables.lock().unwrap().events.push(event.clone());
        Ok(event)
    }

    async fn upcoming_events(&self, now: DateTime<Utc>) -> Result<Vec<Event>> {
        self.check_available()?;
        let mut events: Vec<Event> = self
            .tables
            .lock()
            .unwrap()
            .events
            .iter()
            .filter(|e| e.is_upcoming(now))
            .cloned()
            .collect();
        events.sort_by(|a, b| (a.date_time, &a.location).cmp(&(b.date_time, &b.location)));
        Ok(events)
    }

    async fn find_event(&self, event_id: Uuid) -> Result<Option<Event>> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.events.iter().find(|e| e.id == event_id).cloned())
    }

    async fn event_attendees(&self, event_id: Uuid) -> Result<Vec<UserSummary>> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .filter_map(|r| tables.users.iter().find(|u| u.id == r.user_id))
            .cloned()
            .map(UserSummary::from)
            .collect())
    }

    async fn registration_count(&self, event_id: Uuid) -> Result<i64> {
        self.check_available()?;
        let tables = self.tables.lock().unwrap();
        Ok(tables.registrations.iter().filter(|r| r.event_id == event_id).count() as i64)
    }

    async fn register(&self, event_id: Uuid, user_id: Option<Uuid>, now: DateTime<Utc>) -> Result<Registration> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();

        let event = tables
            .events
            .iter()
            .find(|e| e.id == event_id)
            .cloned()
            .ok_or(EventHubError::EventNotFound { event_id })?;
        let registrants: Vec<Uuid> = tables
            .registrations
            .iter()
            .filter(|r| r.event_id == event_id)
            .map(|r| r.user_id)
            .collect();
        let user_exists = user_id.map_or(false, |id| tables.users.iter().any(|u| u.id == id));

        let user_id = check_eligibility(&event, &registrants, user_id, user_exists, now)?;
        let registration = Registration {
            event_id,
            user_id,
            registered_at: now,
        };
        tables.registrations.push(registration.clone());
        Ok(registration)
    }

    async fn cancel(&self, event_id: Uuid, user_id: Option<Uuid>) -> Result<()> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();

        if !tables.events.iter().any(|e| e.id == event_id) {
            return Err(EventHubError::EventNotFound { event_id });
        }

        let position = tables
            .registrations
            .iter()
            .position(|r| r.event_id == event_id && Some(r.user_id) == user_id)
            .ok_or(EventHubError::NotRegistered)?;
        tables.registrations.remove(position);
        Ok(())
    }

    async fn create_user(&self, request: CreateUserRequest) -> Result<User> {
        self.check_available()?;
        let mut tables = self.tables.lock().unwrap();

        if tables.users.iter().any(|u| u.email == request.email) {
            return Err(EventHubError::UniqueViolation { field: "email".to_string() });
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: request.name,
            email: request.email,
            created_at: now,
            updated_at: now,
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn health_check(&self) -> Result<()> {
        self.check_available()
    }
}
