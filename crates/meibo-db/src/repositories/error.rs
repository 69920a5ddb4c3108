//! Error handling utilities for repositories

use meibo_core::error::DomainError;
use meibo_core::value_objects::DocId;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::StorageError(e.to_string())
}

/// Create a "profile not found" error
pub fn profile_not_found(id: &DocId) -> DomainError {
    DomainError::ProfileNotFound(id.clone())
}
