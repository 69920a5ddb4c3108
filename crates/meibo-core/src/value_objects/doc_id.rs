//! Document identifiers
//!
//! Collection documents are keyed by prefixed string ids generated from the
//! current time in milliseconds (`profile1725432100123`, `event1725432100123`,
//! `user_1725432100123`). Ids supplied by clients are stored verbatim.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// String id of a stored document.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DocId(String);

/// Last millisecond handed out, to keep ids generated within the same
/// millisecond from colliding.
static LAST_MILLIS: AtomicI64 = AtomicI64::new(0);

impl DocId {
    /// Wrap an existing identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generate a fresh `{prefix}{unix_millis}` id.
    ///
    /// Monotonic within a process: two calls in the same millisecond get
    /// distinct timestamps.
    pub fn generate(prefix: &str) -> Self {
        let now = Utc::now().timestamp_millis();
        // fetch_update yields the value *before* the store; recompute the
        // stored value from it.
        let millis = LAST_MILLIS
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .map_or(now, |prev| now.max(prev + 1));
        Self(format!("{prefix}{millis}"))
    }

    /// Generate a profile draft id (`user_{unix_millis}`, the namecard
    /// importer's historical prefix).
    pub fn generate_draft() -> Self {
        Self::generate("user_")
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_carries_prefix() {
        let id = DocId::generate("event");
        assert!(id.as_str().starts_with("event"));
        assert!(id.as_str()["event".len()..].parse::<i64>().is_ok());
    }

    #[test]
    fn test_generated_suffix_is_a_current_timestamp() {
        let before = Utc::now().timestamp_millis();
        let id = DocId::generate("profile");
        let suffix: i64 = id.as_str()["profile".len()..].parse().unwrap();
        assert!(
            suffix >= before,
            "id {id} carries a stale timestamp ({suffix} < {before})"
        );
    }

    #[test]
    fn test_generate_is_unique_within_millisecond() {
        let a = DocId::generate("profile");
        let b = DocId::generate("profile");
        assert_ne!(a, b);
    }

    #[test]
    fn test_draft_prefix() {
        let id = DocId::generate_draft();
        assert!(id.as_str().starts_with("user_"));
    }

    #[test]
    fn test_serde_transparent() {
        let id = DocId::new("profile123");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"profile123\"");
        let back: DocId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
