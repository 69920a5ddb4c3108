//! Namecard import handler
//!
//! Multipart upload with a single `namecard` image field.

use axum::extract::{Multipart, State};
use axum::Json;
use meibo_service::dto::ImportResponse;
use meibo_service::ImportService;

use crate::extractors::AuthUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Multipart field name carrying the image
const FIELD_NAME: &str = "namecard";

/// Import a namecard image as an unapproved profile draft
///
/// POST /api/upload-namecard
pub async fn upload_namecard(
    State(state): State<AppState>,
    auth: AuthUser,
    mut multipart: Multipart,
) -> ApiResult<Json<ImportResponse>> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::invalid_body(e.to_string()))?
    {
        if field.name() != Some(FIELD_NAME) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(ApiError::invalid_body("namecard must be an image"));
        }

        let ext = file_extension(field.file_name());

        // Body-size enforcement happens via the route's DefaultBodyLimit.
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::invalid_body(e.to_string()))?;

        let service = ImportService::new(state.service_context());
        let profile = service.import_namecard(&data, &ext, &auth.email).await?;
        return Ok(Json(ImportResponse::new(profile)));
    }

    Err(ApiError::invalid_body("missing namecard field"))
}

/// Extension for the stored upload, from the client filename. Client names
/// are untrusted; anything outside `[A-Za-z0-9]` is stripped before the
/// extension is spliced into a path.
fn file_extension(file_name: Option<&str>) -> String {
    let ext: String = file_name
        .and_then(|name| name.rsplit_once('.'))
        .map_or("", |(_, ext)| ext)
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect::<String>()
        .to_ascii_lowercase();

    if ext.is_empty() {
        "png".to_string()
    } else {
        ext
    }
}
