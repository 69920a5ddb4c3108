//! Authentication service
//!
//! Handles registration, login and current-user lookup. Sessions are a
//! single signed token; logout is a cookie clear at the HTTP layer, so no
//! server-side state is involved.

use meibo_common::auth::{hash_password, validate_password_strength, verify_password};
use meibo_common::AppError;
use meibo_core::entities::User;
use tracing::{info, instrument, warn};

use crate::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    #[instrument(skip(self, request), fields(username = %request.username, email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        validate_password_strength(&request.password).map_err(ServiceError::from)?;

        if self
            .ctx
            .user_repo()
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Email already registered"));
        }

        if self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
            .is_some()
        {
            return Err(ServiceError::conflict("Username already taken"));
        }

        let password_hash = hash_password(&request.password).map_err(ServiceError::from)?;

        let user = User::register(request.email, request.username);
        self.ctx
            .user_repo()
            .upsert(&user, Some(&password_hash))
            .await?;

        info!(email = %user.email, "User registered successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(&user.email, &user.username, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(token, &user))
    }

    /// Login with username or email
    #[instrument(skip(self, request), fields(identifier = %request.username))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        // The identifier field historically accepts both forms.
        let user = match self
            .ctx
            .user_repo()
            .find_by_username(&request.username)
            .await?
        {
            Some(user) => Some(user),
            None => self.ctx.user_repo().find_by_email(&request.username).await?,
        };

        let Some(user) = user else {
            warn!(identifier = %request.username, "Login failed: user not found");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        };

        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(&user.email)
            .await?
            .ok_or_else(|| {
                warn!(email = %user.email, "Login failed: no stored credential");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let is_valid =
            verify_password(&request.password, &password_hash).map_err(ServiceError::from)?;

        if !is_valid {
            warn!(email = %user.email, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(email = %user.email, "User logged in successfully");

        let token = self
            .ctx
            .jwt_service()
            .issue_token(&user.email, &user.username, user.role)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(token, &user))
    }

    /// Current authenticated user, credential excluded
    #[instrument(skip(self))]
    pub async fn current_user(&self, email: &str) -> ServiceResult<UserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_email(email)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", email))?;

        Ok(UserResponse::from(&user))
    }
}
