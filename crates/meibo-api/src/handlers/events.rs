//! Event handlers
//!
//! GET lists (seeding defaults into an empty store), POST upserts one
//! document, PUT replaces the collection element-wise.

use axum::{extract::State, Json};
use meibo_core::entities::Event;
use meibo_service::dto::{EventUpsertResponse, ReplaceResponse};
use meibo_service::EventService;

use crate::response::ApiResult;
use crate::state::AppState;

/// List all events
///
/// GET /api/events
pub async fn list(State(state): State<AppState>) -> ApiResult<Json<Vec<Event>>> {
    let service = EventService::new(state.service_context());
    let events = service.list().await?;
    Ok(Json(events))
}

/// Upsert one event
///
/// POST /api/events
pub async fn upsert(
    State(state): State<AppState>,
    Json(event): Json<Event>,
) -> ApiResult<Json<EventUpsertResponse>> {
    let service = EventService::new(state.service_context());
    let event = service.upsert(event).await?;
    Ok(Json(EventUpsertResponse::new(event)))
}

/// Replace the collection (bulk upsert of the posted array)
///
/// PUT /api/events
pub async fn replace_all(
    State(state): State<AppState>,
    Json(events): Json<Vec<Event>>,
) -> ApiResult<Json<ReplaceResponse>> {
    let service = EventService::new(state.service_context());
    let count = service.replace_all(events).await?;
    Ok(Json(ReplaceResponse::new(count)))
}
