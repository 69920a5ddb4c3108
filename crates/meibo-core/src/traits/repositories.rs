//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs; the storage layer provides the
//! implementation. Two implementations exist per trait: PostgreSQL and
//! flat JSON files, selected by deployment mode.

use async_trait::async_trait;

use crate::entities::{Event, Profile, User};
use crate::error::DomainError;
use crate::value_objects::DocId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// All profiles, newest upload first.
    async fn find_all(&self) -> RepoResult<Vec<Profile>>;

    /// Approved profiles only, newest upload first.
    async fn find_approved(&self) -> RepoResult<Vec<Profile>>;

    /// Profiles uploaded by the given account, newest first.
    async fn find_by_uploader(&self, email: &str) -> RepoResult<Vec<Profile>>;

    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Profile>>;

    /// Create-or-update keyed by id. Never duplicates an existing id.
    async fn upsert(&self, profile: &Profile) -> RepoResult<()>;

    /// Bulk upsert (the whole-collection replacement path).
    async fn upsert_many(&self, profiles: &[Profile]) -> RepoResult<()>;

    /// Flip the approval flag. Errors with `ProfileNotFound` on unknown ids.
    async fn approve(&self, id: &DocId) -> RepoResult<Profile>;
}

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Event>>;

    /// Create-or-update keyed by id.
    async fn upsert(&self, event: &Event) -> RepoResult<()>;

    /// Bulk upsert (the whole-collection replacement path).
    async fn upsert_many(&self, events: &[Event]) -> RepoResult<()>;
}

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// All user documents, in storage order.
    async fn find_all(&self) -> RepoResult<Vec<User>>;

    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create-or-update keyed by email. `password_hash` replaces the stored
    /// credential when present and leaves it untouched when `None`.
    async fn upsert(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Bulk upsert of documents without credentials.
    async fn upsert_many(&self, users: &[User]) -> RepoResult<()>;

    /// Stored credential for authentication, if the account has one.
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>>;
}
