//! PostgreSQL implementation of ProfileRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meibo_core::entities::Profile;
use meibo_core::traits::{ProfileRepository, RepoResult};
use meibo_core::value_objects::DocId;

use crate::models::ProfileModel;

use super::error::{map_db_error, profile_not_found};

const PROFILE_COLUMNS: &str = "id, name, english_name, age, occupation, company, location, bio, \
     skills, email, phone, website, image, original_image, extracted_text, \
     is_approved, uploaded_by, uploaded_at, created_at, original_page";

/// PostgreSQL implementation of ProfileRepository
#[derive(Clone)]
pub struct PgProfileRepository {
    pool: PgPool,
}

impl PgProfileRepository {
    /// Create a new PgProfileRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn upsert_in<'e, E>(executor: E, profile: &Profile) -> RepoResult<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query(
            r"
            INSERT INTO profiles (id, name, english_name, age, occupation, company, location,
                                  bio, skills, email, phone, website, image, original_image,
                                  extracted_text, is_approved, uploaded_by, uploaded_at,
                                  created_at, original_page)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10,
                    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                english_name = EXCLUDED.english_name,
                age = EXCLUDED.age,
                occupation = EXCLUDED.occupation,
                company = EXCLUDED.company,
                location = EXCLUDED.location,
                bio = EXCLUDED.bio,
                skills = EXCLUDED.skills,
                email = EXCLUDED.email,
                phone = EXCLUDED.phone,
                website = EXCLUDED.website,
                image = EXCLUDED.image,
                original_image = EXCLUDED.original_image,
                extracted_text = EXCLUDED.extracted_text,
                is_approved = EXCLUDED.is_approved,
                uploaded_by = EXCLUDED.uploaded_by,
                uploaded_at = EXCLUDED.uploaded_at,
                created_at = EXCLUDED.created_at,
                original_page = EXCLUDED.original_page
            ",
        )
        .bind(profile.id.as_str())
        .bind(&profile.name)
        .bind(&profile.english_name)
        .bind(profile.age.map(|a| i32::try_from(a).unwrap_or(i32::MAX)))
        .bind(&profile.occupation)
        .bind(&profile.company)
        .bind(&profile.location)
        .bind(&profile.bio)
        .bind(&profile.skills)
        .bind(&profile.email)
        .bind(&profile.phone)
        .bind(&profile.website)
        .bind(&profile.image)
        .bind(&profile.original_image)
        .bind(&profile.extracted_text)
        .bind(profile.is_approved)
        .bind(&profile.uploaded_by)
        .bind(profile.uploaded_at)
        .bind(profile.created_at)
        .bind(&profile.original_page)
        .execute(executor)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for PgProfileRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles ORDER BY uploaded_at DESC NULLS LAST, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_approved(&self) -> RepoResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE is_approved \
             ORDER BY uploaded_at DESC NULLS LAST, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_uploader(&self, email: &str) -> RepoResult<Vec<Profile>> {
        let rows = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE uploaded_by = $1 \
             ORDER BY uploaded_at DESC NULLS LAST, id"
        ))
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Profile::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Profile>> {
        let row = sqlx::query_as::<_, ProfileModel>(&format!(
            "SELECT {PROFILE_COLUMNS} FROM profiles WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Profile::from))
    }

    #[instrument(skip(self, profile), fields(id = %profile.id))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        Self::upsert_in(&self.pool, profile).await
    }

    #[instrument(skip(self, profiles), fields(count = profiles.len()))]
    async fn upsert_many(&self, profiles: &[Profile]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        for profile in profiles {
            Self::upsert_in(&mut *tx, profile).await?;
        }
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: &DocId) -> RepoResult<Profile> {
        let row = sqlx::query_as::<_, ProfileModel>(&format!(
            "UPDATE profiles SET is_approved = TRUE WHERE id = $1 RETURNING {PROFILE_COLUMNS}"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        row.map(Profile::from).ok_or_else(|| profile_not_found(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgProfileRepository>();
    }
}
