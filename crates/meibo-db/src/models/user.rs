//! User database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the users table
///
/// `extra` is a JSONB column carrying the unrecognized document fields that
/// round-trip through the flat-file backend as well.
#[derive(Debug, Clone, FromRow)]
pub struct UserModel {
    pub email: String,
    pub username: String,
    pub role: String,
    pub password_hash: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub extra: serde_json::Value,
}
