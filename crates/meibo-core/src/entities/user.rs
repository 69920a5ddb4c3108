//! User entity - an account keyed by email

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::value_objects::Role;

/// A user account document, keyed by email. Upsert-only; there is no
/// deletion path.
///
/// Beyond the known fields, stored documents carry arbitrary profile-like
/// attributes which round-trip through `extra`. The password hash is never
/// part of the entity; repositories store it separately.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    pub email: String,
    pub username: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Unrecognized document fields, preserved verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl User {
    /// Create a fresh account registered now.
    pub fn register(email: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            username: username.into(),
            role: Role::User,
            created_at: Some(Utc::now()),
            extra: Map::new(),
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
