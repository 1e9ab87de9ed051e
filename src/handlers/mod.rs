//! HTTP handlers module
//!
//! Handlers validate the request, call the [`EventStore`] and translate the
//! outcome into a JSON response.

pub mod error;
pub mod events;
pub mod health;
pub mod users;

use std::sync::Arc;

use crate::database::EventStore;

pub use error::{ApiError, JsonBody};

/// Shared state for all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        Self { store }
    }
}
