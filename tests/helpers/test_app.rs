//! Router-level test harness
//!
//! Wraps the real router over a [`MemoryStore`] and sends requests with
//! `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use eventhub::{build_router, AppState};

use super::memory_store::MemoryStore;
use super::test_data::random_user_body;

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_store(MemoryStore::new())
    }

    pub fn with_store(store: MemoryStore) -> Self {
        let store = Arc::new(store);
        let router = build_router(AppState::new(store.clone()));
        Self { router, store }
    }

    /// Send a request; the body is parsed as JSON when possible, else kept as text
    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                builder = builder.header("content-type", "application/json");
                Body::from(json.to_string())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 64).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.request(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, Some(body)).await
    }

    /// Create an event through the API and return its id
    pub async fn create_event(&self, body: Value) -> Uuid {
        let (status, json) = self.post("/events", body).await;
        assert_eq!(status, StatusCode::CREATED, "create event failed: {json}");
        json["eventId"].as_str().unwrap().parse().unwrap()
    }

    /// Create a fake user through the API and return its id
    pub async fn create_user(&self) -> Uuid {
        let (status, json) = self.post("/events/user", random_user_body()).await;
        assert_eq!(status, StatusCode::CREATED, "create user failed: {json}");
        json["userId"].as_str().unwrap().parse().unwrap()
    }

    pub async fn register(&self, event_id: Uuid, user_id: Uuid) -> (StatusCode, Value) {
        self.post(
            &format!("/events/{event_id}/register"),
            serde_json::json!({ "userId": user_id }),
        )
        .await
    }

    pub async fn cancel(&self, event_id: Uuid, user_id: Uuid) -> (StatusCode, Value) {
        self.post(
            &format!("/events/{event_id}/cancel"),
            serde_json::json!({ "userId": user_id }),
        )
        .await
    }
}
