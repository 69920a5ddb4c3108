//! Authentication extractors
//!
//! The token is accepted from the `token` cookie (the historical browser
//! flow) or a bearer `Authorization` header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    extract::cookie::CookieJar,
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use meibo_core::value_objects::Role;

use crate::response::ApiError;
use crate::state::AppState;

/// Name of the session cookie
pub const TOKEN_COOKIE: &str = "token";

/// Authenticated user extracted from a validated token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Account email (token subject)
    pub email: String,
    pub username: String,
    pub role: Role,
}

impl AuthUser {
    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Cookie first (browser flow), then bearer header.
        let jar = CookieJar::from_headers(&parts.headers);
        let token = match jar.get(TOKEN_COOKIE) {
            Some(cookie) => cookie.value().to_string(),
            None => {
                let TypedHeader(Authorization(bearer)) =
                    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                        .await
                        .map_err(|_| ApiError::MissingAuth)?;
                bearer.token().to_string()
            }
        };

        let app_state = AppState::from_ref(state);
        let claims = app_state
            .jwt_service()
            .validate_token(&token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid token");
                ApiError::InvalidToken
            })?;

        Ok(AuthUser {
            email: claims.sub,
            username: claims.username,
            role: claims.role,
        })
    }
}

/// Authenticated admin. Rejects non-admin tokens with 403.
#[derive(Debug, Clone)]
pub struct AdminUser(pub AuthUser);

#[async_trait]
impl<S> FromRequestParts<S> for AdminUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if !user.is_admin() {
            return Err(ApiError::AdminRequired);
        }
        Ok(AdminUser(user))
    }
}
