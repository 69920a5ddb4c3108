//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: String,
    pub name: String,
    pub english_name: Option<String>,
    pub age: Option<i32>,
    pub occupation: String,
    pub company: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub image: Option<String>,
    pub original_image: Option<String>,
    pub extracted_text: Option<String>,
    pub is_approved: bool,
    pub uploaded_by: Option<String>,
    pub uploaded_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub original_page: Option<String>,
}
