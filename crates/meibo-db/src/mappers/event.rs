//! Event entity <-> model mapper

use meibo_core::entities::Event;
use meibo_core::value_objects::DocId;

use crate::models::EventModel;

impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: DocId::new(model.id),
            title: model.title,
            description: model.description,
            date: model.date,
            location: model.location,
            price: model.price,
            capacity: u32::try_from(model.capacity).unwrap_or(0),
            participants: model.participants,
            checked_in_users: model.checked_in_users,
            created_by: model.created_by,
            created_at: model.created_at,
            category: model.category,
        }
    }
}
