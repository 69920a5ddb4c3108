//! Network-first API client with cache fallback
//!
//! Reads never fail on network problems: a dead server or a non-success
//! status degrades to the cached copy, and events further degrade to the
//! built-in defaults. Writes fire at the server, swallow network failures
//! with a warning, and always mirror the payload into the cache.

use std::collections::BTreeMap;
use std::path::PathBuf;

use meibo_core::entities::{Event, Profile, User};
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::cache::LocalCache;
use crate::error::ClientError;

const EVENTS_KEY: &str = "events";
const PROFILES_KEY: &str = "profiles";
const USERS_KEY: &str = "users";

/// HTTP client for the document API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    cache: LocalCache,
}

impl ApiClient {
    /// Create a client against `base_url` (server root, no trailing slash)
    /// caching under `cache_dir`.
    pub fn new(base_url: impl Into<String>, cache_dir: impl Into<PathBuf>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
            cache: LocalCache::new(cache_dir),
        }
    }

    pub fn cache(&self) -> &LocalCache {
        &self.cache
    }

    async fn fetch<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status));
        }
        Ok(response.json().await?)
    }

    /// Send a write, swallowing network failures with a warning.
    async fn push<T: Serialize + ?Sized>(&self, method: Method, path: &str, body: &T) {
        let url = format!("{}{path}", self.base_url);
        match self.http.request(method, &url).json(body).send().await {
            Ok(response) if !response.status().is_success() => {
                warn!(url = %url, status = %response.status(), "Server rejected write, keeping local copy");
            }
            Ok(_) => {}
            Err(e) => {
                warn!(url = %url, error = %e, "Write failed, keeping local copy");
            }
        }
    }

    /// Read the cached copy, treating a corrupt cache as absent.
    fn cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.cache.load(key) {
            Ok(value) => value,
            Err(e) => {
                warn!(key = key, error = %e, "Cache read failed");
                None
            }
        }
    }

    /// All events, falling back to the cache and then the built-in defaults.
    pub async fn get_events(&self) -> Vec<Event> {
        match self.fetch("/api/events").await {
            Ok(events) => events,
            Err(e) => {
                warn!(error = %e, "Event fetch failed, using local copy");
                self.cached(EVENTS_KEY).unwrap_or_else(Event::default_seed)
            }
        }
    }

    /// Replace the server collection and mirror it into the cache.
    ///
    /// A network failure only warns; a cache failure is the returned error.
    pub async fn save_events(&self, events: &[Event]) -> Result<(), ClientError> {
        self.push(Method::PUT, "/api/events", events).await;
        self.cache.store(EVENTS_KEY, &events)
    }

    /// Prepend an event and save the whole collection.
    pub async fn add_event(&self, event: Event) -> Result<Event, ClientError> {
        let mut events = self.get_events().await;
        events.insert(0, event.clone());
        self.save_events(&events).await?;
        Ok(event)
    }

    /// Approved profiles, falling back to the cache (empty when none).
    pub async fn get_profiles(&self) -> Vec<Profile> {
        match self.fetch("/api/profiles").await {
            Ok(profiles) => profiles,
            Err(e) => {
                warn!(error = %e, "Profile fetch failed, using local copy");
                self.cached(PROFILES_KEY).unwrap_or_default()
            }
        }
    }

    pub async fn save_profiles(&self, profiles: &[Profile]) -> Result<(), ClientError> {
        self.push(Method::PUT, "/api/profiles", profiles).await;
        self.cache.store(PROFILES_KEY, &profiles)
    }

    /// All users keyed by email, falling back to the cache (empty when none).
    pub async fn get_users(&self) -> BTreeMap<String, User> {
        match self.fetch("/api/users").await {
            Ok(users) => users,
            Err(e) => {
                warn!(error = %e, "User fetch failed, using local copy");
                self.cached(USERS_KEY).unwrap_or_default()
            }
        }
    }

    pub async fn save_users(&self, users: &BTreeMap<String, User>) -> Result<(), ClientError> {
        self.push(Method::POST, "/api/users", users).await;
        self.cache.store(USERS_KEY, users)
    }
}
