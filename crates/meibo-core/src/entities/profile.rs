//! Profile entity - a published (or pending) person profile

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::DocId;

/// A person profile document.
///
/// Field names follow the stored JSON (camelCase on the wire). Most string
/// fields default to empty rather than `None` because imported drafts carry
/// whatever the namecard parser managed to fill in, and manual documents
/// were never validated beyond their id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub id: DocId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    pub occupation: String,
    pub company: String,
    pub location: String,
    pub bio: String,
    pub skills: Vec<String>,
    pub email: String,
    pub phone: String,
    pub website: String,
    /// Display image URL (placeholder avatar for imported drafts).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Filename of the uploaded namecard image, when imported.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_image: Option<String>,
    /// Raw OCR text kept for manual correction.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extracted_text: Option<String>,
    pub is_approved: bool,
    /// Email of the account that imported this profile.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uploaded_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Pre-existing hand-written page; the site generator links to it
    /// instead of rendering a page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_page: Option<String>,
}

impl Profile {
    /// Create an empty profile with the given id and name.
    pub fn new(id: DocId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            ..Self::default()
        }
    }

    /// Mark the profile approved (soft approval gates public visibility).
    pub fn approve(&mut self) {
        self.is_approved = true;
    }

    /// Page filename the site generator uses for this profile.
    pub fn page_name(&self) -> String {
        match &self.original_page {
            Some(page) => page.clone(),
            None => format!("{}.html", self.id),
        }
    }
}
