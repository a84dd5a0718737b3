use async_trait::async_trait;
use quiz_core::model::StudentId;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Key under which the registered student's identifier is persisted.
pub const STUDENT_ID_KEY: &str = "studentId";

/// Errors surfaced by storage adapters.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StorageError {
    #[error("not found")]
    NotFound,

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Client-side key/value persistence that survives restarts.
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Read a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or replace a value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove a value. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;
}

/// Typed accessors for the student identifier.
#[async_trait]
pub trait StudentIdStore {
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    async fn load_student_id(&self) -> Result<Option<StudentId>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the value cannot be stored.
    async fn save_student_id(&self, id: &StudentId) -> Result<(), StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    async fn clear_student_id(&self) -> Result<(), StorageError>;
}

#[async_trait]
impl<T: SessionRepository + ?Sized> StudentIdStore for T {
    async fn load_student_id(&self) -> Result<Option<StudentId>, StorageError> {
        Ok(self.get(STUDENT_ID_KEY).await?.and_then(StudentId::new))
    }

    async fn save_student_id(&self, id: &StudentId) -> Result<(), StorageError> {
        self.put(STUDENT_ID_KEY, id.as_str()).await
    }

    async fn clear_student_id(&self) -> Result<(), StorageError> {
        self.delete(STUDENT_ID_KEY).await
    }
}

/// Simple in-memory repository implementation for testing and prototyping.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self {
            values: Arc::new(Mutex::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl SessionRepository for InMemoryRepository {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn put(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .values
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub sessions: Arc<dyn SessionRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        let sessions: Arc<dyn SessionRepository> = Arc::new(InMemoryRepository::new());
        Self { sessions }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn student_id_round_trips_and_clears() {
        let repo = InMemoryRepository::new();
        assert_eq!(repo.load_student_id().await.unwrap(), None);

        let id = StudentId::new("42").unwrap();
        repo.save_student_id(&id).await.unwrap();
        assert_eq!(repo.load_student_id().await.unwrap(), Some(id));
        assert_eq!(
            repo.get(STUDENT_ID_KEY).await.unwrap().as_deref(),
            Some("42")
        );

        repo.clear_student_id().await.unwrap();
        assert_eq!(repo.load_student_id().await.unwrap(), None);
    }

    #[tokio::test]
    async fn deleting_missing_key_is_ok() {
        let repo = InMemoryRepository::new();
        repo.delete("nothing").await.unwrap();
    }

    #[tokio::test]
    async fn blank_stored_value_reads_as_absent() {
        let repo = InMemoryRepository::new();
        repo.put(STUDENT_ID_KEY, "").await.unwrap();
        assert_eq!(repo.load_student_id().await.unwrap(), None);
    }
}
