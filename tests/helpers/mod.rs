//! Test helpers module
//!
//! This module provides utilities and helpers for testing the EventHub service.
//! It includes an in-memory store, database helpers, and test data builders.

#![allow(dead_code)]

pub mod database_helper;
pub mod memory_store;
pub mod test_app;
pub mod test_data;

pub use database_helper::*;
pub use memory_store::*;
pub use test_app::*;
pub use test_data::*;
