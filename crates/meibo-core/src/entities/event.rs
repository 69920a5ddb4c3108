//! Event entity - a community event with participants and check-ins

use serde::{Deserialize, Serialize};

use crate::value_objects::DocId;

/// A community event document.
///
/// `date`, `created_at` and `price` stay free-text strings: stored documents
/// carry zone-less ISO timestamps and prices like "無料", and the upsert path
/// accepts whatever the client posted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: DocId,
    pub title: String,
    pub description: String,
    /// ISO timestamp string, stored verbatim.
    pub date: String,
    pub location: String,
    pub price: String,
    /// Never checked against the participant count.
    pub capacity: u32,
    /// User emails. Membership is deduplicated on join.
    pub participants: Vec<String>,
    pub checked_in_users: Vec<String>,
    pub created_by: String,
    pub created_at: String,
    pub category: String,
}

impl Event {
    /// Add a participant. Idempotent: joining twice leaves exactly one entry.
    pub fn join(&mut self, user: impl Into<String>) {
        let user = user.into();
        if !self.participants.contains(&user) {
            self.participants.push(user);
        }
    }

    /// Check a user in. Idempotent like [`join`](Self::join).
    pub fn check_in(&mut self, user: impl Into<String>) {
        let user = user.into();
        if !self.checked_in_users.contains(&user) {
            self.checked_in_users.push(user);
        }
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    /// The events seeded into an empty store on first read.
    pub fn default_seed() -> Vec<Self> {
        vec![
            Self {
                id: DocId::new("event005"),
                title: "8時だよ全員集合朝会".to_string(),
                description: "毎日の朝のミーティングです。今日の予定や目標を共有しましょう。"
                    .to_string(),
                date: "2025-09-04T08:00:00".to_string(),
                location: "オンライン（Zoom）".to_string(),
                price: "無料".to_string(),
                capacity: 50,
                participants: Vec::new(),
                checked_in_users: Vec::new(),
                created_by: "admin@example.com".to_string(),
                created_at: "2025-09-04T07:00:00".to_string(),
                category: "meeting".to_string(),
            },
            Self {
                id: DocId::new("event1756988138911"),
                title: "コミュニティイベント".to_string(),
                description: "みんなで交流しましょう！".to_string(),
                date: "2025-09-05T19:00:00".to_string(),
                location: "東京".to_string(),
                price: "無料".to_string(),
                capacity: 30,
                participants: vec!["tomura@hackjpn.com".to_string()],
                checked_in_users: Vec::new(),
                created_by: "tomura@hackjpn.com".to_string(),
                created_at: "2025-09-04T12:00:00".to_string(),
                category: "community".to_string(),
            },
        ]
    }
}
