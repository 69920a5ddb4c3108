//! JSON collection files on disk

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::{Mutex, MutexGuard};

use meibo_core::entities::{Event, Profile, User};
use meibo_core::error::DomainError;
use meibo_core::traits::RepoResult;

/// Stored form of a user document. The credential lives next to the entity
/// in `users.json` but never enters the domain type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct UserRecord {
    #[serde(flatten)]
    pub user: User,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Collection files under a single data directory.
///
/// `profiles.json` and `events.json` hold arrays; `users.json` holds a map
/// keyed by email. Missing files read as empty collections, so the store is
/// self-initializing on first write.
pub struct FileStore {
    data_dir: PathBuf,
    pub(crate) profiles: Mutex<()>,
    pub(crate) events: Mutex<()>,
    pub(crate) users: Mutex<()>,
}

impl FileStore {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            profiles: Mutex::new(()),
            events: Mutex::new(()),
            users: Mutex::new(()),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub(crate) async fn lock_profiles(&self) -> MutexGuard<'_, ()> {
        self.profiles.lock().await
    }

    pub(crate) async fn lock_events(&self) -> MutexGuard<'_, ()> {
        self.events.lock().await
    }

    pub(crate) async fn lock_users(&self) -> MutexGuard<'_, ()> {
        self.users.lock().await
    }

    pub(crate) async fn load_profiles(&self) -> RepoResult<Vec<Profile>> {
        self.read_json("profiles.json").await
    }

    pub(crate) async fn save_profiles(&self, profiles: &[Profile]) -> RepoResult<()> {
        self.write_json("profiles.json", &profiles).await
    }

    pub(crate) async fn load_events(&self) -> RepoResult<Vec<Event>> {
        self.read_json("events.json").await
    }

    pub(crate) async fn save_events(&self, events: &[Event]) -> RepoResult<()> {
        self.write_json("events.json", &events).await
    }

    pub(crate) async fn load_users(&self) -> RepoResult<BTreeMap<String, UserRecord>> {
        self.read_json("users.json").await
    }

    pub(crate) async fn save_users(
        &self,
        users: &BTreeMap<String, UserRecord>,
    ) -> RepoResult<()> {
        self.write_json("users.json", users).await
    }

    async fn read_json<T>(&self, file: &str) -> RepoResult<T>
    where
        T: DeserializeOwned + Default,
    {
        let path = self.data_dir.join(file);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(T::default()),
            Err(e) => return Err(storage_error(file, e)),
        };

        serde_json::from_slice(&bytes).map_err(|e| storage_error(file, e))
    }

    async fn write_json<T>(&self, file: &str, value: &T) -> RepoResult<()>
    where
        T: Serialize,
    {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|e| storage_error(file, e))?;

        let bytes = serde_json::to_vec_pretty(value).map_err(|e| storage_error(file, e))?;
        tokio::fs::write(self.data_dir.join(file), bytes)
            .await
            .map_err(|e| storage_error(file, e))
    }
}

fn storage_error(file: &str, e: impl std::fmt::Display) -> DomainError {
    DomainError::StorageError(format!("{file}: {e}"))
}
