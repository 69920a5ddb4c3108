//! Event service
//!
//! Listing seeds the built-in defaults into an empty store; writes are
//! upserts keyed by the document id.

use chrono::{SecondsFormat, Utc};
use tracing::{info, instrument};

use meibo_core::entities::Event;
use meibo_core::value_objects::DocId;

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all events, seeding the defaults when the store is empty
    #[instrument(skip(self))]
    pub async fn list(&self) -> ServiceResult<Vec<Event>> {
        let events = self.ctx.event_repo().find_all().await?;
        if !events.is_empty() {
            return Ok(events);
        }

        let seed = Event::default_seed();
        self.ctx.event_repo().upsert_many(&seed).await?;
        info!(count = seed.len(), "Seeded default events into empty store");
        Ok(seed)
    }

    /// Upsert one event. A missing id gets a generated `event{millis}` id
    /// and a creation timestamp.
    #[instrument(skip(self, event))]
    pub async fn upsert(&self, mut event: Event) -> ServiceResult<Event> {
        if event.id.is_empty() {
            event.id = DocId::generate("event");
        }
        if event.created_at.is_empty() {
            event.created_at = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
        }

        self.ctx.event_repo().upsert(&event).await?;
        Ok(event)
    }

    /// Whole-collection replacement: upsert every posted element.
    /// Last write wins; elements absent from the posted array stay stored.
    #[instrument(skip(self, events), fields(count = events.len()))]
    pub async fn replace_all(&self, events: Vec<Event>) -> ServiceResult<usize> {
        self.ctx.event_repo().upsert_many(&events).await?;
        Ok(events.len())
    }
}
