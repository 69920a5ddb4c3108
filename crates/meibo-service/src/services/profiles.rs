//! Profile service
//!
//! Public listing is approved-only; per-uploader listing and approval back
//! the authenticated endpoints.

use chrono::Utc;
use tracing::{info, instrument};

use meibo_core::entities::Profile;
use meibo_core::value_objects::DocId;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Approved profiles, newest upload first
    #[instrument(skip(self))]
    pub async fn list_approved(&self) -> ServiceResult<Vec<Profile>> {
        Ok(self.ctx.profile_repo().find_approved().await?)
    }

    /// Profiles uploaded by the given account, newest first
    #[instrument(skip(self))]
    pub async fn list_by_uploader(&self, email: &str) -> ServiceResult<Vec<Profile>> {
        Ok(self.ctx.profile_repo().find_by_uploader(email).await?)
    }

    /// Upsert one profile. A missing id gets a generated `profile{millis}`
    /// id and a creation timestamp.
    #[instrument(skip(self, profile))]
    pub async fn upsert(&self, mut profile: Profile) -> ServiceResult<Profile> {
        if profile.id.is_empty() {
            profile.id = DocId::generate("profile");
        }
        if profile.created_at.is_none() {
            profile.created_at = Some(Utc::now());
        }

        self.ctx.profile_repo().upsert(&profile).await?;
        Ok(profile)
    }

    /// Whole-collection replacement: upsert every posted element
    #[instrument(skip(self, profiles), fields(count = profiles.len()))]
    pub async fn replace_all(&self, profiles: Vec<Profile>) -> ServiceResult<usize> {
        self.ctx.profile_repo().upsert_many(&profiles).await?;
        Ok(profiles.len())
    }

    /// Flip approval on a draft (admin gate sits at the HTTP layer)
    #[instrument(skip(self))]
    pub async fn approve(&self, id: &DocId) -> ServiceResult<Profile> {
        let profile = self.ctx.profile_repo().approve(id).await?;
        info!(id = %profile.id, "Profile approved");
        Ok(profile)
    }
}
