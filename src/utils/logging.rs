//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the EventHub service.

use std::path::Path;

use tracing::{debug, error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};
use uuid::Uuid;

use crate::config::LoggingConfig;
use crate::utils::errors::{EventHubError, Result};

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file appender when dropped; hold it until
/// the process exits.
pub fn init_logging(config: &LoggingConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let stdout_layer = if config.json {
        tracing_subscriber::fmt::layer().json().with_writer(std::io::stdout).boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_writer(std::io::stdout)
            .boxed()
    };

    let (file_layer, guard) = match config.file_path.as_deref() {
        Some(path) => {
            let directory = Path::new(path);
            std::fs::create_dir_all(directory)?;
            let file_appender = tracing_appender::rolling::daily(directory, "eventhub.log");
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stdout_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| EventHubError::Config(format!("Failed to initialize logging: {e}")))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log registration management actions
pub fn log_registration_action(event_id: Uuid, action: &str, user_id: Uuid) {
    info!(
        event_id = %event_id,
        action = action,
        user_id = %user_id,
        "Registration action performed"
    );
}

/// Log a rejected registration attempt
pub fn log_registration_rejected(event_id: Uuid, action: &str, reason: &str) {
    debug!(
        event_id = %event_id,
        action = action,
        reason = reason,
        "Registration request rejected"
    );
}

/// Log creation of a top-level record
pub fn log_record_created(table: &str, id: Uuid) {
    info!(table = table, id = %id, "Record created");
}

/// Log a failed store operation that is surfaced to the client as a 5xx
pub fn log_store_failure(action: &str, error: &EventHubError) {
    error!(
        action = action,
        severity = %error.severity(),
        error = %error,
        "Store operation failed"
    );
}
