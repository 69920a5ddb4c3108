//! Integration test utilities for the profile server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API with a file-backed store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
