//! Registration rules
//!
//! The eligibility checks and capacity statistics shared by every
//! [`EventStore`](crate::database::EventStore) implementation. Stores gather
//! the facts (event row, current registrants, whether the user exists) and
//! these functions decide.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::models::{Event, EventStats};
use crate::utils::errors::{EventHubError, Result};
use crate::utils::helpers::round2;

/// Decide whether `candidate` may register for `event`.
///
/// Checks run in a fixed order and the first failure wins: past event,
/// full event, duplicate registration, unknown user. `candidate` is `None`
/// when the requested id could not be parsed; such an id names no user.
pub fn check_eligibility(
    event: &Event,
    registrants: &[Uuid],
    candidate: Option<Uuid>,
    user_exists: bool,
    now: DateTime<Utc>,
) -> Result<Uuid> {
    if event.date_time < now {
        return Err(EventHubError::PastEvent);
    }

    if registrants.len() as i64 >= i64::from(event.capacity) {
        return Err(EventHubError::EventFull);
    }

    let user_id = match candidate {
        Some(id) if registrants.contains(&id) => return Err(EventHubError::AlreadyRegistered),
        Some(id) if user_exists => id,
        _ => return Err(EventHubError::UserNotFound),
    };

    Ok(user_id)
}

/// Capacity usage for an event with `total` registrants
pub fn compute_stats(capacity: i32, total: i64) -> EventStats {
    let capacity = i64::from(capacity);
    let percent_used = if capacity > 0 {
        round2(total as f64 / capacity as f64 * 100.0)
    } else if total > 0 {
        100.0
    } else {
        0.0
    };

    EventStats {
        total_registrations: total,
        remaining_capacity: capacity - total,
        percent_used,
    }
}
