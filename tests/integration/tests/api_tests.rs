//! API Integration Tests
//!
//! Most tests run against a throwaway file-backed store and need no
//! external services. The postgres test additionally requires:
//! - Running PostgreSQL instance
//! - Environment variables: DATABASE_URL, JWT_SECRET, API_PORT
//!
//! Run with: cargo test -p integration-tests --test api_tests

use integration_tests::{
    admin_token, assert_json, assert_status, check_postgres_env, fixtures::*, issue_token,
    TestServer,
};
use meibo_common::AppConfig;
use meibo_core::entities::{Event, Profile, User};
use meibo_core::Role;
use reqwest::StatusCode;
use std::collections::BTreeMap;

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

// ============================================================================
// Event Tests
// ============================================================================

#[tokio::test]
async fn test_empty_store_seeds_default_events() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/events").await.unwrap();
    let events: Vec<Event> = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(!events.is_empty());
    assert!(events.iter().any(|e| e.id.as_str() == "event005"));
}

#[tokio::test]
async fn test_event_upsert_generates_id() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/events", &new_event()).await.unwrap();
    let body: EventUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert!(body.event.id.as_str().starts_with("event"));
    assert!(!body.event.created_at.is_empty());
}

#[tokio::test]
async fn test_event_upsert_updates_in_place() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/events", &new_event()).await.unwrap();
    let created: EventUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let mut updated = created.event.clone();
    updated.title = "改名されたイベント".to_string();
    let response = server.post("/api/events", &updated).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();

    let response = server.get("/api/events").await.unwrap();
    let events: Vec<Event> = assert_json(response, StatusCode::OK).await.unwrap();
    let matching: Vec<_> = events
        .iter()
        .filter(|e| e.id == created.event.id)
        .collect();
    assert_eq!(matching.len(), 1);
    assert_eq!(matching[0].title, "改名されたイベント");
}

#[tokio::test]
async fn test_events_bulk_replace() {
    let server = TestServer::start().await.expect("Failed to start server");
    let events = vec![new_event(), new_event()];

    let response = server.put("/api/events", &events).await.unwrap();
    let body: ReplaceResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert!(body.success);
    assert_eq!(body.count, 2);
}

// ============================================================================
// Auth Tests
// ============================================================================

#[tokio::test]
async fn test_register_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    let response = server.post("/api/register", &request).await.unwrap();
    assert!(response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("token=")));

    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();
    assert!(auth.success);
    assert_eq!(auth.user.email, request.email);
    assert_eq!(auth.user.role, "user");
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_register_duplicate_email() {
    let server = TestServer::start().await.expect("Failed to start server");
    let request = RegisterRequest::unique();

    // First registration
    server.post("/api/register", &request).await.unwrap();

    // Second registration with same email
    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::CONFLICT).await.unwrap();
}

#[tokio::test]
async fn test_register_rejects_short_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let mut request = RegisterRequest::unique();
    request.password = "short".to_string();

    let response = server.post("/api/register", &request).await.unwrap();
    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_login() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Register first
    let register_req = RegisterRequest::unique();
    server.post("/api/register", &register_req).await.unwrap();

    // Login with the email
    let login_req = LoginRequest::from_register(&register_req);
    let response = server.post("/api/login", &login_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(auth.user.username, register_req.username);
    assert!(!auth.token.is_empty());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    server.post("/api/register", &register_req).await.unwrap();

    let response = server
        .post("/api/login", &LoginRequest::wrong_password(&register_req))
        .await
        .unwrap();

    let status = response.status();
    let error: ErrorResponse = response.json().await.unwrap();
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error.error.code, "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn test_current_user() {
    let server = TestServer::start().await.expect("Failed to start server");
    let register_req = RegisterRequest::unique();
    let response = server.post("/api/register", &register_req).await.unwrap();
    let auth: AuthResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    let response = server.get_auth("/api/user", &auth.token).await.unwrap();
    let user: UserResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(user.email, register_req.email);
}

#[tokio::test]
async fn test_current_user_requires_auth() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/api/user").await.unwrap();
    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_logout_clears_cookie() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/api/logout", &serde_json::json!({}))
        .await
        .unwrap();

    let cookie = response
        .headers()
        .get("set-cookie")
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["success"], true);
    assert!(cookie.is_some_and(|v| v.starts_with("token=")));
}

// ============================================================================
// Profile Tests
// ============================================================================

#[tokio::test]
async fn test_unapproved_profile_hidden_from_listing() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/profiles", &new_profile()).await.unwrap();
    let created: ProfileUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(created.profile.id.as_str().starts_with("profile"));

    let response = server.get("/api/profiles").await.unwrap();
    let listed: Vec<Profile> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().all(|p| p.id != created.profile.id));
}

#[tokio::test]
async fn test_my_profiles_lists_own_uploads() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_token("uploader@example.com", "uploader", Role::User);

    let mut profile = new_profile();
    profile.uploaded_by = Some("uploader@example.com".to_string());
    server.post("/api/profiles", &profile).await.unwrap();
    server.post("/api/profiles", &new_profile()).await.unwrap();

    let response = server.get_auth("/api/my-profiles", &token).await.unwrap();
    let mine: Vec<Profile> = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(mine.len(), 1);
    assert_eq!(mine[0].uploaded_by.as_deref(), Some("uploader@example.com"));
}

#[tokio::test]
async fn test_approve_requires_admin() {
    let server = TestServer::start().await.expect("Failed to start server");
    let user_token = issue_token("user@example.com", "user", Role::User);

    let response = server.post("/api/profiles", &new_profile()).await.unwrap();
    let created: ProfileUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/profiles/{}/approve", created.profile.id);
    let response = server
        .patch_auth(&path, &user_token, &serde_json::json!({}))
        .await
        .unwrap();
    assert_status(response, StatusCode::FORBIDDEN).await.unwrap();
}

#[tokio::test]
async fn test_approve_publishes_profile() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.post("/api/profiles", &new_profile()).await.unwrap();
    let created: ProfileUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();

    let path = format!("/api/profiles/{}/approve", created.profile.id);
    let response = server
        .patch_auth(&path, &admin_token(), &serde_json::json!({}))
        .await
        .unwrap();
    let approved: ProfileUpsertResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(approved.profile.is_approved);

    let response = server.get("/api/profiles").await.unwrap();
    let listed: Vec<Profile> = assert_json(response, StatusCode::OK).await.unwrap();
    assert!(listed.iter().any(|p| p.id == created.profile.id));
}

#[tokio::test]
async fn test_approve_unknown_profile_is_not_found() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .patch_auth(
            "/api/profiles/no-such-id/approve",
            &admin_token(),
            &serde_json::json!({}),
        )
        .await
        .unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// User Document Tests
// ============================================================================

#[tokio::test]
async fn test_users_single_and_map_upsert() {
    let server = TestServer::start().await.expect("Failed to start server");

    // Single document, decided by the string email field
    let single = User::register("taro@example.com", "taro");
    let response = server.post("/api/users", &single).await.unwrap();
    let body: ReplaceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, 1);

    // Email-keyed map
    let mut map = BTreeMap::new();
    map.insert(
        "hanako@example.com".to_string(),
        User::register("hanako@example.com", "hanako"),
    );
    map.insert(
        "jiro@example.com".to_string(),
        User::register("jiro@example.com", "jiro"),
    );
    let response = server.post("/api/users", &map).await.unwrap();
    let body: ReplaceResponse = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(body.count, 2);

    let response = server.get("/api/users").await.unwrap();
    let users: BTreeMap<String, User> = assert_json(response, StatusCode::OK).await.unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.contains_key("taro@example.com"));
}

// ============================================================================
// Namecard Import Tests
// ============================================================================

#[tokio::test]
async fn test_upload_without_namecard_field_is_bad_request() {
    let server = TestServer::start().await.expect("Failed to start server");
    let token = issue_token("uploader@example.com", "uploader", Role::User);

    let form = reqwest::multipart::Form::new().text("other", "value");
    let response = server
        .client
        .post(format!("{}/api/upload-namecard", server.base_url()))
        .header("Authorization", format!("Bearer {token}"))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_status(response, StatusCode::BAD_REQUEST)
        .await
        .unwrap();
}

#[tokio::test]
async fn test_upload_requires_auth() {
    let server = TestServer::start().await.expect("Failed to start server");

    let form = reqwest::multipart::Form::new().text("other", "value");
    let response = server
        .client
        .post(format!("{}/api/upload-namecard", server.base_url()))
        .multipart(form)
        .send()
        .await
        .unwrap();

    assert_status(response, StatusCode::UNAUTHORIZED)
        .await
        .unwrap();
}

// ============================================================================
// Postgres Mode (env-gated)
// ============================================================================

#[tokio::test]
async fn test_postgres_mode_health() {
    if !check_postgres_env() {
        return;
    }

    let config = AppConfig::from_env().expect("Failed to load config");
    let server = TestServer::start_with_config(config, None)
        .await
        .expect("Failed to start server");

    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}
