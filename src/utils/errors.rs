//! Error handling for EventHub
//!
//! This module defines the main error type used throughout the application.
//! Storage failures, configuration problems and registration rule violations
//! all flow through [`EventHubError`]; the HTTP layer decides how each one is
//! presented to clients.

use thiserror::Error;
use uuid::Uuid;

/// Postgres SQLSTATE for `unique_violation`
const UNIQUE_VIOLATION: &str = "23505";

/// Main error type for EventHub application
#[derive(Error, Debug)]
pub enum EventHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A uniqueness constraint rejected a write. `field` names the column.
    #[error("Unique constraint violated on {field}")]
    UniqueViolation { field: String },

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: Uuid },

    #[error("User not found")]
    UserNotFound,

    #[error("Cannot register for past events")]
    PastEvent,

    #[error("Event is full")]
    EventFull,

    #[error("User already registered for this event")]
    AlreadyRegistered,

    #[error("User is not registered for this event")]
    NotRegistered,
}

/// Result type alias for EventHub operations
pub type Result<T> = std::result::Result<T, EventHubError>;

impl EventHubError {
    /// Translate a write failure, turning unique violations into
    /// [`EventHubError::UniqueViolation`].
    ///
    /// `fields` maps constraint names to the column they guard.
    pub fn from_write(err: sqlx::Error, fields: &[(&str, &str)]) -> Self {
        if let sqlx::Error::Database(ref db_err) = err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                let constraint = db_err.constraint().unwrap_or_default();
                let field = fields
                    .iter()
                    .find(|(name, _)| *name == constraint)
                    .map(|(_, field)| field.to_string())
                    .unwrap_or_else(|| constraint.to_string());
                return EventHubError::UniqueViolation { field };
            }
        }
        EventHubError::Database(err)
    }

    /// Whether the error was caused by the request rather than the server
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            EventHubError::InvalidInput(_)
                | EventHubError::UniqueViolation { .. }
                | EventHubError::EventNotFound { .. }
                | EventHubError::UserNotFound
                | EventHubError::PastEvent
                | EventHubError::EventFull
                | EventHubError::AlreadyRegistered
                | EventHubError::NotRegistered
        )
    }

    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            EventHubError::Database(_) => ErrorSeverity::Critical,
            EventHubError::Migration(_) => ErrorSeverity::Critical,
            EventHubError::Config(_) => ErrorSeverity::Critical,
            EventHubError::Io(_) => ErrorSeverity::Error,
            EventHubError::UniqueViolation { .. } => ErrorSeverity::Warning,
            _ => ErrorSeverity::Info,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl std::fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorSeverity::Info => write!(f, "INFO"),
            ErrorSeverity::Warning => write!(f, "WARN"),
            ErrorSeverity::Error => write!(f, "ERROR"),
            ErrorSeverity::Critical => write!(f, "CRITICAL"),
        }
    }
}
