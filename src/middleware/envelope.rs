//! Error envelope for responses axum builds itself
//!
//! A request with the wrong method on a known path is answered by the
//! router with a bare 405. This rewrites it into the JSON error body.

use axum::{
    http::{
        header::{ALLOW, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};

use crate::handlers::ApiError;

pub async fn json_method_not_allowed(response: Response) -> Response {
    if response.status() != StatusCode::METHOD_NOT_ALLOWED || response.headers().contains_key(CONTENT_TYPE) {
        return response;
    }

    let allow = response.headers().get(ALLOW).cloned();
    let mut mapped = ApiError::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed").into_response();
    if let Some(allow) = allow {
        mapped.headers_mut().insert(ALLOW, allow);
    }
    mapped
}
