//! User document handlers
//!
//! Users travel as an `email → user` object; POST accepts a single
//! document (decided by the presence of a string `email` field) or a map.

use std::collections::BTreeMap;

use axum::{extract::State, Json};
use meibo_core::entities::User;
use meibo_service::dto::ReplaceResponse;
use meibo_service::UserService;

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// All users keyed by email
///
/// GET /api/users
pub async fn map(State(state): State<AppState>) -> ApiResult<Json<BTreeMap<String, User>>> {
    let service = UserService::new(state.service_context());
    let users = service.map().await?;
    Ok(Json(users))
}

/// Upsert a single user or an email-keyed map of users
///
/// POST /api/users
pub async fn upsert(
    State(state): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> ApiResult<Json<ReplaceResponse>> {
    let service = UserService::new(state.service_context());

    let count = if body.get("email").is_some_and(serde_json::Value::is_string) {
        let user: User =
            serde_json::from_value(body).map_err(|e| ApiError::invalid_body(e.to_string()))?;
        service.upsert(user).await?
    } else {
        let users: BTreeMap<String, User> =
            serde_json::from_value(body).map_err(|e| ApiError::invalid_body(e.to_string()))?;
        service.upsert_map(users).await?
    };

    Ok(Json(ReplaceResponse::new(count)))
}
