//! Request extractors

mod auth;
mod validated;

pub use auth::{AdminUser, AuthUser, TOKEN_COOKIE};
pub use validated::ValidatedJson;
