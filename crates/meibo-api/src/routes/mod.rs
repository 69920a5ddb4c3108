//! Route definitions
//!
//! API routes mounted under /api, plus /uploads static serving and the
//! health probe.

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, patch, post},
    Router,
};
use tower_http::services::ServeDir;

use crate::handlers::{auth, events, health, import, profiles, users};
use crate::state::AppState;

/// Create the main router with all routes
pub fn create_router(upload_dir: &str, max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .nest("/api", api_routes(max_upload_bytes))
        .nest_service("/uploads", ServeDir::new(upload_dir))
}

/// API routes
fn api_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .merge(collection_routes())
        .merge(auth_routes())
        .merge(import_routes(max_upload_bytes))
}

/// Public collection CRUD routes
fn collection_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list).post(events::upsert).put(events::replace_all))
        .route(
            "/profiles",
            get(profiles::list).post(profiles::upsert).put(profiles::replace_all),
        )
        .route("/profiles/:id/approve", patch(profiles::approve))
        .route("/my-profiles", get(profiles::my_profiles))
        .route("/users", get(users::map).post(users::upsert))
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(auth::register))
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/user", get(auth::current_user))
}

/// Namecard import route with its own body limit
fn import_routes(max_upload_bytes: usize) -> Router<AppState> {
    Router::new()
        .route("/upload-namecard", post(import::upload_namecard))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
}
