//! Service context - dependency container for services
//!
//! Holds the repositories (either backend), the JWT service and the import
//! pipeline dependencies.

use std::path::PathBuf;
use std::sync::Arc;

use meibo_common::auth::JwtService;
use meibo_core::traits::{EventRepository, ProfileRepository, UserRepository};

use crate::ocr::OcrEngine;

/// Service context containing all dependencies
///
/// The repositories are trait objects, so the same context type serves the
/// PostgreSQL and flat-file deployments.
#[derive(Clone)]
pub struct ServiceContext {
    profile_repo: Arc<dyn ProfileRepository>,
    event_repo: Arc<dyn EventRepository>,
    user_repo: Arc<dyn UserRepository>,

    jwt_service: Arc<JwtService>,

    // Import pipeline
    ocr_engine: Arc<dyn OcrEngine>,
    upload_dir: PathBuf,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        profile_repo: Arc<dyn ProfileRepository>,
        event_repo: Arc<dyn EventRepository>,
        user_repo: Arc<dyn UserRepository>,
        jwt_service: Arc<JwtService>,
        ocr_engine: Arc<dyn OcrEngine>,
        upload_dir: PathBuf,
    ) -> Self {
        Self {
            profile_repo,
            event_repo,
            user_repo,
            jwt_service,
            ocr_engine,
            upload_dir,
        }
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the OCR engine
    pub fn ocr_engine(&self) -> &dyn OcrEngine {
        self.ocr_engine.as_ref()
    }

    /// Directory namecard uploads are persisted to
    pub fn upload_dir(&self) -> &PathBuf {
        &self.upload_dir
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("repositories", &"...")
            .field("upload_dir", &self.upload_dir)
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    user_repo: Option<Arc<dyn UserRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    ocr_engine: Option<Arc<dyn OcrEngine>>,
    upload_dir: Option<PathBuf>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn ocr_engine(mut self, engine: Arc<dyn OcrEngine>) -> Self {
        self.ocr_engine = Some(engine);
        self
    }

    pub fn upload_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_dir = Some(dir.into());
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.event_repo
                .ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.ocr_engine
                .ok_or_else(|| ServiceError::validation("ocr_engine is required"))?,
            self.upload_dir
                .ok_or_else(|| ServiceError::validation("upload_dir is required"))?,
        ))
    }
}
