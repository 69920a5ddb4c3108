//! Namecard import pipeline
//!
//! Uploaded image → persisted original → normalized PNG → OCR → heuristic
//! field parser → unapproved Profile draft. Any processing failure aborts
//! the whole import.

use chrono::Utc;
use tracing::{info, instrument, warn};

use meibo_common::AppError;
use meibo_core::entities::Profile;
use meibo_core::namecard::{estimate_gender, parse_namecard, placeholder_image, NamecardFields};
use meibo_core::value_objects::DocId;

use crate::ocr::normalize_for_ocr;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Namecard import service
pub struct ImportService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ImportService<'a> {
    /// Create a new ImportService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run the full pipeline and store the resulting draft.
    ///
    /// `ext` is the client file extension (already vetted as an image type
    /// by the HTTP layer); `uploader` is the authenticated account email.
    #[instrument(skip(self, data), fields(bytes = data.len(), uploader = %uploader))]
    pub async fn import_namecard(
        &self,
        data: &[u8],
        ext: &str,
        uploader: &str,
    ) -> ServiceResult<Profile> {
        let millis = Utc::now().timestamp_millis();
        let original_name = format!("namecard_{millis}.{ext}");

        let upload_dir = self.ctx.upload_dir().clone();
        tokio::fs::create_dir_all(&upload_dir)
            .await
            .map_err(|e| ServiceError::App(AppError::Storage(e.to_string())))?;
        tokio::fs::write(upload_dir.join(&original_name), data)
            .await
            .map_err(|e| ServiceError::App(AppError::Storage(e.to_string())))?;

        // Normalization is CPU-bound; keep it off the async workers.
        let owned = data.to_vec();
        let normalized = tokio::task::spawn_blocking(move || normalize_for_ocr(&owned))
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .map_err(|e| ServiceError::App(AppError::ImageProcessing(e.to_string())))?;

        let normalized_path = upload_dir.join(format!("namecard_{millis}_ocr.png"));
        tokio::fs::write(&normalized_path, &normalized)
            .await
            .map_err(|e| ServiceError::App(AppError::Storage(e.to_string())))?;

        let text = self
            .ctx
            .ocr_engine()
            .recognize(&normalized_path)
            .await
            .map_err(|e| {
                warn!(error = %e, "OCR failed");
                ServiceError::App(AppError::OcrFailed)
            })?;

        let fields = parse_namecard(&text);
        let profile = draft_from_fields(fields, &text, &original_name, uploader);

        self.ctx.profile_repo().upsert(&profile).await?;
        info!(id = %profile.id, "Namecard draft stored");

        Ok(profile)
    }
}

/// Build the unapproved draft from parsed fields plus raw OCR text.
fn draft_from_fields(
    fields: NamecardFields,
    extracted_text: &str,
    original_image: &str,
    uploader: &str,
) -> Profile {
    let gender = estimate_gender(&fields.name);
    let image = placeholder_image(&fields.name, gender);
    let now = Utc::now();

    Profile {
        id: DocId::generate_draft(),
        name: fields.name,
        bio: synthesize_bio(&fields.company, &fields.occupation),
        occupation: fields.occupation,
        company: fields.company,
        location: fields.location,
        email: fields.email,
        phone: fields.phone,
        website: fields.website,
        image: Some(image),
        original_image: Some(original_image.to_string()),
        extracted_text: Some(extracted_text.to_string()),
        is_approved: false,
        uploaded_by: Some(uploader.to_string()),
        uploaded_at: Some(now),
        created_at: Some(now),
        ..Profile::default()
    }
}

/// One-line bio from whatever the parser recovered.
fn synthesize_bio(company: &str, occupation: &str) -> String {
    match (company.is_empty(), occupation.is_empty()) {
        (false, false) => format!("{company}の{occupation}です。"),
        (false, true) => format!("{company}に勤務しています。"),
        (true, false) => format!("{occupation}です。"),
        (true, true) => "名刺から作成されたプロフィールです。".to_string(),
    }
}
