//! Offline-tolerant API client
//!
//! Wraps the HTTP API with a network-first, cache-fallback access pattern:
//! reads try the server and degrade to a locally cached copy (events fall
//! back to the built-in defaults when no cache exists), writes are mirrored
//! into the cache whether or not the server accepted them. The cache is
//! never reconciled when connectivity returns.

pub mod cache;
pub mod client;
pub mod error;

pub use cache::LocalCache;
pub use client::ApiClient;
pub use error::ClientError;
