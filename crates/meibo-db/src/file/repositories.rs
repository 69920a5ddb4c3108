//! Flat-file implementations of the repository traits

use std::cmp::Reverse;
use std::sync::Arc;

use async_trait::async_trait;
use tracing::instrument;

use meibo_core::entities::{Event, Profile, User};
use meibo_core::error::DomainError;
use meibo_core::traits::{EventRepository, ProfileRepository, RepoResult, UserRepository};
use meibo_core::value_objects::DocId;

use super::store::{FileStore, UserRecord};

fn sort_newest_first(profiles: &mut [Profile]) {
    profiles.sort_by_key(|p| (Reverse(p.uploaded_at), p.id.clone()));
}

/// Flat-file implementation of ProfileRepository
#[derive(Clone)]
pub struct FileProfileRepository {
    store: Arc<FileStore>,
}

impl FileProfileRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl ProfileRepository for FileProfileRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Profile>> {
        let mut profiles = self.store.load_profiles().await?;
        sort_newest_first(&mut profiles);
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn find_approved(&self) -> RepoResult<Vec<Profile>> {
        let mut profiles = self.store.load_profiles().await?;
        profiles.retain(|p| p.is_approved);
        sort_newest_first(&mut profiles);
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn find_by_uploader(&self, email: &str) -> RepoResult<Vec<Profile>> {
        let mut profiles = self.store.load_profiles().await?;
        profiles.retain(|p| p.uploaded_by.as_deref() == Some(email));
        sort_newest_first(&mut profiles);
        Ok(profiles)
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Profile>> {
        let profiles = self.store.load_profiles().await?;
        Ok(profiles.into_iter().find(|p| &p.id == id))
    }

    #[instrument(skip(self, profile), fields(id = %profile.id))]
    async fn upsert(&self, profile: &Profile) -> RepoResult<()> {
        let _guard = self.store.lock_profiles().await;
        let mut profiles = self.store.load_profiles().await?;
        upsert_by_id(&mut profiles, profile.clone(), |p| &p.id);
        self.store.save_profiles(&profiles).await
    }

    #[instrument(skip(self, incoming), fields(count = incoming.len()))]
    async fn upsert_many(&self, incoming: &[Profile]) -> RepoResult<()> {
        let _guard = self.store.lock_profiles().await;
        let mut profiles = self.store.load_profiles().await?;
        for profile in incoming {
            upsert_by_id(&mut profiles, profile.clone(), |p| &p.id);
        }
        self.store.save_profiles(&profiles).await
    }

    #[instrument(skip(self))]
    async fn approve(&self, id: &DocId) -> RepoResult<Profile> {
        let _guard = self.store.lock_profiles().await;
        let mut profiles = self.store.load_profiles().await?;

        let Some(profile) = profiles.iter_mut().find(|p| &p.id == id) else {
            return Err(DomainError::ProfileNotFound(id.clone()));
        };
        profile.approve();
        let approved = profile.clone();

        self.store.save_profiles(&profiles).await?;
        Ok(approved)
    }
}

/// Flat-file implementation of EventRepository
///
/// Events keep their stored array order; there is no date-based sort in
/// this backend.
#[derive(Clone)]
pub struct FileEventRepository {
    store: Arc<FileStore>,
}

impl FileEventRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl EventRepository for FileEventRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        self.store.load_events().await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: &DocId) -> RepoResult<Option<Event>> {
        let events = self.store.load_events().await?;
        Ok(events.into_iter().find(|e| &e.id == id))
    }

    #[instrument(skip(self, event), fields(id = %event.id))]
    async fn upsert(&self, event: &Event) -> RepoResult<()> {
        let _guard = self.store.lock_events().await;
        let mut events = self.store.load_events().await?;
        upsert_by_id(&mut events, event.clone(), |e| &e.id);
        self.store.save_events(&events).await
    }

    #[instrument(skip(self, incoming), fields(count = incoming.len()))]
    async fn upsert_many(&self, incoming: &[Event]) -> RepoResult<()> {
        let _guard = self.store.lock_events().await;
        let mut events = self.store.load_events().await?;
        for event in incoming {
            upsert_by_id(&mut events, event.clone(), |e| &e.id);
        }
        self.store.save_events(&events).await
    }
}

/// Flat-file implementation of UserRepository
#[derive(Clone)]
pub struct FileUserRepository {
    store: Arc<FileStore>,
}

impl FileUserRepository {
    pub fn new(store: Arc<FileStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl UserRepository for FileUserRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<User>> {
        let users = self.store.load_users().await?;
        Ok(users.into_values().map(|r| r.user).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let users = self.store.load_users().await?;
        Ok(users.get(email).map(|r| r.user.clone()))
    }

    #[instrument(skip(self))]
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>> {
        let users = self.store.load_users().await?;
        Ok(users
            .into_values()
            .map(|r| r.user)
            .find(|u| u.username == username))
    }

    #[instrument(skip(self, user, password_hash), fields(email = %user.email))]
    async fn upsert(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()> {
        let _guard = self.store.lock_users().await;
        let mut users = self.store.load_users().await?;

        match users.get_mut(&user.email) {
            Some(record) => {
                record.user = user.clone();
                if let Some(hash) = password_hash {
                    record.password = Some(hash.to_string());
                }
            }
            None => {
                users.insert(
                    user.email.clone(),
                    UserRecord {
                        user: user.clone(),
                        password: password_hash.map(str::to_string),
                    },
                );
            }
        }

        self.store.save_users(&users).await
    }

    #[instrument(skip(self, incoming), fields(count = incoming.len()))]
    async fn upsert_many(&self, incoming: &[User]) -> RepoResult<()> {
        let _guard = self.store.lock_users().await;
        let mut users = self.store.load_users().await?;

        for user in incoming {
            match users.get_mut(&user.email) {
                Some(record) => record.user = user.clone(),
                None => {
                    users.insert(
                        user.email.clone(),
                        UserRecord {
                            user: user.clone(),
                            password: None,
                        },
                    );
                }
            }
        }

        self.store.save_users(&users).await
    }

    #[instrument(skip(self))]
    async fn get_password_hash(&self, email: &str) -> RepoResult<Option<String>> {
        let users = self.store.load_users().await?;
        Ok(users.get(email).and_then(|r| r.password.clone()))
    }
}

/// Replace the element with a matching id or append a new one.
fn upsert_by_id<T, F>(items: &mut Vec<T>, incoming: T, id_of: F)
where
    F: Fn(&T) -> &DocId,
{
    let id = id_of(&incoming).clone();
    match items.iter_mut().find(|item| id_of(item) == &id) {
        Some(slot) => *slot = incoming,
        None => items.push(incoming),
    }
}
