//! Response DTOs for API endpoints
//!
//! Success envelopes mirror the stored-document conventions: writes answer
//! `{"success": true, ...}` with the affected document embedded.

use serde::Serialize;

use meibo_core::entities::{Event, Profile, User};
use meibo_core::value_objects::Role;

/// Public view of a user account (credential excluded by construction).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub email: String,
    pub username: String,
    pub role: Role,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            email: user.email.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Authentication response: the signed token plus the account it names.
///
/// The token is also set as a cookie by the HTTP layer; it is repeated in
/// the body for bearer-header clients.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

impl AuthResponse {
    pub fn new(token: String, user: &User) -> Self {
        Self {
            success: true,
            token,
            user: UserResponse::from(user),
        }
    }
}

/// Response to a single-event upsert
#[derive(Debug, Serialize)]
pub struct EventUpsertResponse {
    pub success: bool,
    pub event: Event,
}

impl EventUpsertResponse {
    pub fn new(event: Event) -> Self {
        Self {
            success: true,
            event,
        }
    }
}

/// Response to a single-profile upsert
#[derive(Debug, Serialize)]
pub struct ProfileUpsertResponse {
    pub success: bool,
    pub profile: Profile,
}

impl ProfileUpsertResponse {
    pub fn new(profile: Profile) -> Self {
        Self {
            success: true,
            profile,
        }
    }
}

/// Response to a bulk replacement (PUT) or user upsert
#[derive(Debug, Serialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub count: usize,
}

impl ReplaceResponse {
    pub fn new(count: usize) -> Self {
        Self {
            success: true,
            count,
        }
    }
}

/// Response to a namecard import: the stored unapproved draft.
#[derive(Debug, Serialize)]
pub struct ImportResponse {
    pub success: bool,
    pub profile: Profile,
}

impl ImportResponse {
    pub fn new(profile: Profile) -> Self {
        Self {
            success: true,
            profile,
        }
    }
}
