//! Middleware module
//!
//! This module contains middleware for request processing

pub mod envelope;
pub mod logging;

pub use envelope::json_method_not_allowed;
pub use logging::http_trace_layer;
