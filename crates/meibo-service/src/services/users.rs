//! User document service
//!
//! Users travel as an `email → user` JSON object on the wire; writes accept
//! a single document or a map of them. No deletion path exists.

use std::collections::BTreeMap;

use tracing::instrument;

use meibo_core::entities::User;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User document service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All user documents keyed by email, credentials excluded
    #[instrument(skip(self))]
    pub async fn map(&self) -> ServiceResult<BTreeMap<String, User>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.into_iter().map(|u| (u.email.clone(), u)).collect())
    }

    /// Upsert a single user document (no credential change)
    #[instrument(skip(self, user), fields(email = %user.email))]
    pub async fn upsert(&self, user: User) -> ServiceResult<usize> {
        if user.email.is_empty() {
            return Err(ServiceError::validation("email is required"));
        }
        self.ctx.user_repo().upsert(&user, None).await?;
        Ok(1)
    }

    /// Bulk upsert of an `email → user` map. Map keys win over any `email`
    /// field inside the document.
    #[instrument(skip(self, users), fields(count = users.len()))]
    pub async fn upsert_map(&self, users: BTreeMap<String, User>) -> ServiceResult<usize> {
        let users: Vec<User> = users
            .into_iter()
            .map(|(email, mut user)| {
                user.email = email;
                user
            })
            .collect();

        self.ctx.user_repo().upsert_many(&users).await?;
        Ok(users.len())
    }
}
