//! Test data helpers for creating request bodies and domain records

use chrono::{DateTime, Duration, Utc};
use fake::faker::address::en::CityName;
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Words;
use fake::faker::name::en::Name;
use fake::Fake;
use serde_json::{json, Value};
use uuid::Uuid;

use eventhub::models::{CreateEventRequest, CreateUserRequest, Event};

/// A timestamp `days` days from now (negative for the past)
pub fn days_from_now(days: i64) -> DateTime<Utc> {
    Utc::now() + Duration::days(days)
}

/// `POST /events` body
pub fn event_body(title: &str, date_time: DateTime<Utc>, location: &str, capacity: Value) -> Value {
    json!({
        "title": title,
        "date_time": date_time.to_rfc3339(),
        "location": location,
        "capacity": capacity,
    })
}

/// `POST /events` body for a future event with fake title and location
pub fn random_event_body(capacity: i64) -> Value {
    let words: Vec<String> = Words(2..4).fake();
    let location: String = CityName().fake();
    event_body(&words.join(" "), days_from_now(14), &location, json!(capacity))
}

/// A unique fake user. The email carries a random tag so repeated calls
/// never collide on the unique constraint.
pub fn random_user() -> CreateUserRequest {
    let name: String = Name().fake();
    let email: String = SafeEmail().fake();
    CreateUserRequest {
        name,
        email: format!("{}.{}", Uuid::new_v4().simple(), email),
    }
}

/// `POST /events/user` body for a fresh fake user
pub fn random_user_body() -> Value {
    let user = random_user();
    json!({ "name": user.name, "email": user.email })
}

pub fn event_request(title: &str, date_time: DateTime<Utc>, location: &str, capacity: i32) -> CreateEventRequest {
    CreateEventRequest {
        title: title.to_string(),
        date_time,
        location: location.to_string(),
        capacity,
    }
}

/// A complete event record, for seeding stores directly
pub fn event_record(date_time: DateTime<Utc>, location: &str, capacity: i32) -> Event {
    let now = Utc::now();
    Event {
        id: Uuid::new_v4(),
        title: "Seeded Event".to_string(),
        date_time,
        location: location.to_string(),
        capacity,
        created_at: now,
        updated_at: now,
    }
}
