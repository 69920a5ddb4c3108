//! Profile handlers
//!
//! The public listing is approved-only; drafts surface through
//! `/api/my-profiles` and the admin approval endpoint.

use axum::extract::{Path, State};
use axum::Json;
use meibo_core::entities::Profile;
use meibo_core::value_objects::DocId;
use meibo_service::dto::{ProfileUpsertResponse, ReplaceResponse};
use meibo_service::ProfileService;

use crate::extractors::{AdminUser, AuthUser};
use crate::response::ApiResult;
use crate::state::AppState;

/// List approved profiles, newest first
///
/// GET /api/profiles
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Profile>>> {
    let service = ProfileService::new(state.service_context());
    let profiles = service.list_approved().await?;
    Ok(Json(profiles))
}

/// Upsert one profile
///
/// POST /api/profiles
pub async fn upsert(
    State(state): State<AppState>,
    Json(profile): Json<Profile>,
) -> ApiResult<Json<ProfileUpsertResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.upsert(profile).await?;
    Ok(Json(ProfileUpsertResponse::new(profile)))
}

/// Replace the collection (bulk upsert of the posted array)
///
/// PUT /api/profiles
pub async fn replace_all(
    State(state): State<AppState>,
    Json(profiles): Json<Vec<Profile>>,
) -> ApiResult<Json<ReplaceResponse>> {
    let service = ProfileService::new(state.service_context());
    let count = service.replace_all(profiles).await?;
    Ok(Json(ReplaceResponse::new(count)))
}

/// Profiles uploaded by the caller, newest first
///
/// GET /api/my-profiles
pub async fn my_profiles(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<Profile>>> {
    let service = ProfileService::new(state.service_context());
    let profiles = service.list_by_uploader(&auth.email).await?;
    Ok(Json(profiles))
}

/// Approve a draft (admin only)
///
/// PATCH /api/profiles/:id/approve
pub async fn approve(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ProfileUpsertResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.approve(&DocId::new(id)).await?;
    Ok(Json(ProfileUpsertResponse::new(profile)))
}
