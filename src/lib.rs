//! EventHub
//!
//! An HTTP service for managing events and user registrations: create events,
//! list upcoming ones, register and cancel attendance, and report how much of
//! each event's capacity is taken.

pub mod config;
pub mod database;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod server;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{EventHubError, Result};

// Re-export main components for easy access
pub use database::{DatabaseService, EventStore};
pub use handlers::AppState;
pub use server::build_router;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
