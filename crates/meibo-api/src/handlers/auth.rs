//! Authentication handlers
//!
//! Registration, login, logout and current-user endpoints. Sessions ride a
//! `token` cookie; the same token is echoed in the body for bearer clients.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use meibo_service::dto::{AuthResponse, LoginRequest, RegisterRequest, UserResponse};
use meibo_service::AuthService;

use crate::extractors::{AuthUser, ValidatedJson, TOKEN_COOKIE};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

fn session_cookie(token: String, max_age_secs: i64) -> Cookie<'static> {
    Cookie::build((TOKEN_COOKIE, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(time::Duration::seconds(max_age_secs))
        .build()
}

/// Register a new account
///
/// POST /api/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<Json<AuthResponse>>)> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;

    let jar = jar.add(session_cookie(
        response.token.clone(),
        state.jwt_service().token_expiry(),
    ));
    Ok((jar, Created(Json(response))))
}

/// Login with username or email
///
/// POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let jar = jar.add(session_cookie(
        response.token.clone(),
        state.jwt_service().token_expiry(),
    ));
    Ok((jar, Json(response)))
}

/// Logout: clear the session cookie. Stateless otherwise.
///
/// POST /api/logout
pub async fn logout(jar: CookieJar) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.remove(Cookie::build(TOKEN_COOKIE).path("/").build());
    (jar, Json(serde_json::json!({ "success": true })))
}

/// Current authenticated user
///
/// GET /api/user
pub async fn current_user(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<UserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(&auth.email).await?;
    Ok(Json(response))
}
