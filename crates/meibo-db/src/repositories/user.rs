//! PostgreSQL implementation of UserRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meibo_core::entities::User;
use meibo_core::traits::{RepoResult, UserRepository};

use crate::models::UserModel;

use super::error::map_db_error;

const USER_COLUMNS: &str = "email, username, role, password_hash, created_at, extra";

/// PostgreSQL implementation of UserRepository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    /// Create a new PgUserRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn upsert_in<'e, E>(
        executor: E,
        user: &User,
        password_hash: Option<&str>,
    ) -> RepoResult<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        // COALESCE keeps the stored credential when no replacement is given.
        sqlx::query(
            r"
            INSERT INTO users (email, username, role, password_hash, created_at, extra)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (email) DO UPDATE SET
                username = EXCLUDED.username,
                role = EXCLUDED.role,
                password_hash = COALESCE(EXCLUDED.password_hash, users.password_hash),
                created_at = COALESCE(EXCLUDED.created_at, users.created_at),
                extra = EXCLUDED.extra
            ",
        )
        .bind(&user.email)
        .bind(&user.username)
        .bind(user.role.as_str())
        .bind(password_hash)
        .bind(user.created_at)
        .bind(serde_json::Value::Object(user.extra.clone()))
        .execute(executor)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users ORDER BY email"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(User::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let row = sqlx::query_as::<_, UserModel>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE username = $1 ORDER BY email LIMIT 1"
        ))
        .bind(username)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(User::from))
    }

    #[instrument(skip(self, user, password_hash), fields(email = %user.email))]
    async fn upsert(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        Self::upsert_in(&self.pool, user, password_hash).await
    }

    #[instrument(skip(self, users), fields(count = users.len()))]
    async fn upsert_many(&self, users: &[User]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        for user in users {
            Self::upsert_in(&mut *tx, user, None).await?;
        }
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        let hash = sqlx::query_scalar::<_, Option<String>>(
            r"
            SELECT password_hash FROM users WHERE email = $1
            ",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(hash.flatten())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgUserRepository>();
    }
}
