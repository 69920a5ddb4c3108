//! Event database model

use sqlx::FromRow;

/// Database model for the events table
///
/// `date`, `price` and `created_at` are free-text columns; stored documents
/// carry zone-less timestamps and prices like "無料" verbatim.
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: String,
    pub title: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub price: String,
    pub capacity: i32,
    pub participants: Vec<String>,
    pub checked_in_users: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub category: String,
}
