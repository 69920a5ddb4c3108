//! Client error types

use std::path::Path;

/// Errors surfaced by the client.
///
/// Reads never return `Request`/`Status`: those paths degrade to the cache
/// instead. Only cache I/O problems surface to the caller.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {0}")]
    Status(reqwest::StatusCode),

    #[error("Cache error at {path}: {message}")]
    Cache { path: String, message: String },
}

impl ClientError {
    pub(crate) fn cache(path: &Path, source: impl std::fmt::Display) -> Self {
        Self::Cache {
            path: path.display().to_string(),
            message: source.to_string(),
        }
    }
}
