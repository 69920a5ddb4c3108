//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use meibo_core::{entities::Event, entities::Profile, value_objects::DocId};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Registration request
#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser{suffix}"),
            email: format!("test{suffix}@example.com"),
            password: "TestPass123!".to_string(),
        }
    }
}

/// Login request; `username` also accepts the account email
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.email.clone(),
            password: reg.password.clone(),
        }
    }

    pub fn wrong_password(reg: &RegisterRequest) -> Self {
        Self {
            username: reg.email.clone(),
            password: "WrongPass123!".to_string(),
        }
    }
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub success: bool,
    pub token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub email: String,
    pub username: String,
    pub role: String,
}

/// Upsert response carrying the stored event
#[derive(Debug, Deserialize)]
pub struct EventUpsertResponse {
    pub success: bool,
    pub event: Event,
}

/// Upsert response carrying the stored profile
#[derive(Debug, Deserialize)]
pub struct ProfileUpsertResponse {
    pub success: bool,
    pub profile: Profile,
}

/// Bulk replace response
#[derive(Debug, Deserialize)]
pub struct ReplaceResponse {
    pub success: bool,
    pub count: usize,
}

/// A fresh event with a unique title and no id
pub fn new_event() -> Event {
    let suffix = unique_suffix();
    Event {
        title: format!("テストイベント{suffix}"),
        description: "統合テスト用のイベントです".to_string(),
        date: "2025-10-01T19:00:00".to_string(),
        location: "東京".to_string(),
        price: "無料".to_string(),
        capacity: 30,
        category: "community".to_string(),
        ..Event::default()
    }
}

/// A fresh profile with a unique name and no id
pub fn new_profile() -> Profile {
    let suffix = unique_suffix();
    Profile {
        name: format!("テスト太郎{suffix}"),
        occupation: "エンジニア".to_string(),
        location: "東京".to_string(),
        bio: "統合テスト用のプロフィールです".to_string(),
        ..Profile::default()
    }
}

/// An approved profile with a fixed id
pub fn approved_profile(id: &str) -> Profile {
    Profile {
        id: DocId::new(id),
        is_approved: true,
        ..new_profile()
    }
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
