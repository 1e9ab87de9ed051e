//! Services module
//!
//! Business rules that sit between the HTTP handlers and the stores

pub mod registration;

pub use registration::{check_eligibility, compute_stats};
