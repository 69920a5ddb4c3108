//! PostgreSQL implementation of EventRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use meibo_core::entities::Event;
use meibo_core::traits::{EventRepository, RepoResult};
use meibo_core::value_objects::DocId;

use crate::models::EventModel;

use super::error::map_db_error;

const EVENT_COLUMNS: &str = "id, title, description, date, location, price, capacity, \
     participants, checked_in_users, created_by, created_at, category";

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn upsert_in<'e, E>(executor: E, event: &Event) -> RepoResult<()>
    where
        E: sqlx::PgExecutor<'e>,
    {
        sqlx::query(
            r"
            INSERT INTO events (id, title, description, date, location, price, capacity,
                                participants, checked_in_users, created_by, created_at, category)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                description = EXCLUDED.description,
                date = EXCLUDED.date,
                location = EXCLUDED.location,
                price = EXCLUDED.price,
                capacity = EXCLUDED.capacity,
                participants = EXCLUDED.participants,
                checked_in_users = EXCLUDED.checked_in_users,
                created_by = EXCLUDED.created_by,
                created_at = EXCLUDED.created_at,
                category = EXCLUDED.category
            ",
        )
        .bind(event.id.as_str())
        .bind(&event.title)
        .bind(&event.description)
        .bind(&event.date)
        .bind(&event.location)
        .bind(&event.price)
        .bind(i32::try_from(event.capacity).unwrap_or(i32::MAX))
        .bind(&event.participants)
        .bind(&event.checked_in_users)
        .bind(&event.created_by)
        .bind(&event.created_at)
        .bind(&event.category)
        .execute(executor)
        .await
        .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let rows = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events ORDER BY date, id"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(rows.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Event>> {
        let row = sqlx::query_as::<_, EventModel>(&format!(
            "SELECT {EVENT_COLUMNS} FROM events WHERE id = $1"
        ))
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(row.map(Event::from))
    }

    #[instrument(skip(self, event), fields(id = %event.id))]
    async fn upsert(&self, event: &Event) -> RepoResult<()> {
        Self::upsert_in(&self.pool, event).await
    }

    #[instrument(skip(self, events), fields(count = events.len()))]
    async fn upsert_many(&self, events: &[Event]) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        for event in events {
            Self::upsert_in(&mut *tx, event).await?;
        }
        tx.commit().await.map_err(map_db_error)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgEventRepository>();
    }
}
