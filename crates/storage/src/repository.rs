use academy_core::model::{Progress, User, UserId, UserRecord};
use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;
use tracing::debug;

use crate::keys;

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupt persisted state under `{key}`: {reason}")]
    Corrupt { key: String, reason: String },
}

/// String key to string value persistence, the shape of browser local storage.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing anything already there.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be reached.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

/// Repository contract for per-user progress records.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// Fetch the stored progress for a user, if any.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the stored value does not decode
    /// into a progress record for this user.
    async fn get_progress(&self, user_id: UserId) -> Result<Option<Progress>, StorageError>;

    /// Overwrite the whole progress record for `progress.user_id`.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the record cannot be encoded or stored.
    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError>;
}

/// Repository contract for the mock account list and the signed-in user.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the stored list does not decode.
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be encoded or stored.
    async fn save_users(&self, users: &[UserRecord]) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError::Corrupt` if the stored user does not decode.
    async fn current_user(&self) -> Result<Option<User>, StorageError>;

    /// Set or clear (`None`) the signed-in user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the user cannot be encoded or stored.
    async fn set_current_user(&self, user: Option<&User>) -> Result<(), StorageError>;
}

/// Simple in-memory key-value store for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryStore {
    items: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for InMemoryStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .items
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Typed repositories layered over any `KeyValueStore`, storing JSON values.
#[derive(Clone)]
pub struct JsonRepository {
    kv: Arc<dyn KeyValueStore>,
}

impl JsonRepository {
    #[must_use]
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self { kv }
    }

    async fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StorageError> {
        let Some(raw) = self.kv.get_item(key).await? else {
            debug!(key, "no stored value");
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| StorageError::Corrupt {
                key: key.to_owned(),
                reason: err.to_string(),
            })
    }

    async fn write<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        debug!(key, bytes = raw.len(), "writing value");
        self.kv.set_item(key, &raw).await
    }
}

#[async_trait]
impl ProgressRepository for JsonRepository {
    async fn get_progress(&self, user_id: UserId) -> Result<Option<Progress>, StorageError> {
        let key = keys::progress_key(user_id);
        let progress: Option<Progress> = self.read(&key).await?;
        match progress {
            Some(p) if p.user_id != user_id => Err(StorageError::Corrupt {
                key,
                reason: format!("record belongs to user {}", p.user_id),
            }),
            other => Ok(other),
        }
    }

    async fn save_progress(&self, progress: &Progress) -> Result<(), StorageError> {
        self.write(&keys::progress_key(progress.user_id), progress)
            .await
    }
}

#[async_trait]
impl UserRepository for JsonRepository {
    async fn list_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        Ok(self.read(keys::USERS).await?.unwrap_or_default())
    }

    async fn save_users(&self, users: &[UserRecord]) -> Result<(), StorageError> {
        self.write(keys::USERS, users).await
    }

    async fn current_user(&self) -> Result<Option<User>, StorageError> {
        self.read(keys::CURRENT_USER).await
    }

    async fn set_current_user(&self, user: Option<&User>) -> Result<(), StorageError> {
        match user {
            Some(user) => self.write(keys::CURRENT_USER, user).await,
            None => self.kv.remove_item(keys::CURRENT_USER).await,
        }
    }
}

/// Aggregates the repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub kv: Arc<dyn KeyValueStore>,
    pub progress: Arc<dyn ProgressRepository>,
    pub users: Arc<dyn UserRepository>,
}

impl Storage {
    /// Wire the typed repositories over an existing key-value backend.
    #[must_use]
    pub fn from_kv(kv: Arc<dyn KeyValueStore>) -> Self {
        let repo = JsonRepository::new(Arc::clone(&kv));
        let progress: Arc<dyn ProgressRepository> = Arc::new(repo.clone());
        let users: Arc<dyn UserRepository> = Arc::new(repo);
        Self {
            kv,
            progress,
            users,
        }
    }

    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_kv(Arc::new(InMemoryStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use academy_core::model::{LessonId, QuizId};
    use academy_core::time::fixed_now;

    fn user(email: &str) -> User {
        User {
            id: UserId::generate(),
            email: email.into(),
            name: "Ana".into(),
            avatar: None,
        }
    }

    #[tokio::test]
    async fn progress_round_trips_through_json() {
        let storage = Storage::in_memory();
        let id = UserId::generate();
        let mut progress = Progress::empty(id);
        progress.complete_lesson(LessonId::new("html-1"), fixed_now());
        progress.record_score(QuizId::new("html-quiz"), 80);
        storage.progress.save_progress(&progress).await.unwrap();

        let fetched = storage.progress.get_progress(id).await.unwrap().unwrap();
        assert_eq!(fetched, progress);

        let raw = storage
            .kv
            .get_item(&format!("progress_{id}"))
            .await
            .unwrap()
            .unwrap();
        assert!(raw.contains("\"completedLessons\":[\"html-1\"]"));
    }

    #[tokio::test]
    async fn missing_progress_is_none() {
        let storage = Storage::in_memory();
        assert!(
            storage
                .progress
                .get_progress(UserId::generate())
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn malformed_progress_is_corrupt() {
        let storage = Storage::in_memory();
        let id = UserId::generate();
        let key = keys::progress_key(id);
        storage
            .kv
            .set_item(&key, r#"{"userId": 42}"#)
            .await
            .unwrap();

        let err = storage.progress.get_progress(id).await.unwrap_err();
        assert!(matches!(err, StorageError::Corrupt { key: k, .. } if k == key));
    }

    #[tokio::test]
    async fn progress_for_another_user_is_corrupt() {
        let storage = Storage::in_memory();
        let id = UserId::generate();
        let other = Progress::empty(UserId::generate());
        let raw = serde_json::to_string(&other).unwrap();
        storage
            .kv
            .set_item(&keys::progress_key(id), &raw)
            .await
            .unwrap();

        assert!(matches!(
            storage.progress.get_progress(id).await,
            Err(StorageError::Corrupt { .. })
        ));
    }

    #[tokio::test]
    async fn current_user_can_be_cleared() {
        let storage = Storage::in_memory();
        let ana = user("ana@example.com");
        storage.users.set_current_user(Some(&ana)).await.unwrap();
        assert_eq!(storage.users.current_user().await.unwrap(), Some(ana));

        storage.users.set_current_user(None).await.unwrap();
        assert_eq!(storage.users.current_user().await.unwrap(), None);
        assert!(
            storage
                .kv
                .get_item(keys::CURRENT_USER)
                .await
                .unwrap()
                .is_none()
        );
    }

    #[tokio::test]
    async fn users_list_defaults_to_empty() {
        let storage = Storage::in_memory();
        assert!(storage.users.list_users().await.unwrap().is_empty());

        let record = UserRecord {
            user: user("ana@example.com"),
            password: "pw".into(),
        };
        storage
            .users
            .save_users(std::slice::from_ref(&record))
            .await
            .unwrap();
        assert_eq!(storage.users.list_users().await.unwrap(), vec![record]);
    }
}
