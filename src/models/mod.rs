//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod event;
pub mod user;
pub mod registration;

// Re-export commonly used models
pub use event::{Event, EventDetails, EventStats, CreateEventRequest, CreateEventPayload, MIN_CAPACITY, MAX_CAPACITY};
pub use user::{User, UserSummary, CreateUserRequest, CreateUserPayload};
pub use registration::{Registration, RegistrationPayload};
