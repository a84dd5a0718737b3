use std::sync::{Arc, PoisonError, RwLock};

use quiz_core::model::StudentId;
use storage::{SessionRepository, StorageError, StudentIdStore};

/// The registered student, if any.
///
/// Persisted through a `SessionRepository` and cached in memory so pages can read
/// it synchronously while rendering. Presence is the only thing checked: there is
/// no expiry and no validation of the stored value.
#[derive(Clone)]
pub struct StudentSession {
    repo: Arc<dyn SessionRepository>,
    current: Arc<RwLock<Option<StudentId>>>,
}

impl StudentSession {
    /// Load the persisted identifier.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the repository cannot be read.
    pub async fn load(repo: Arc<dyn SessionRepository>) -> Result<Self, StorageError> {
        let stored = repo.load_student_id().await?;
        Ok(Self {
            repo,
            current: Arc::new(RwLock::new(stored)),
        })
    }

    #[must_use]
    pub fn current(&self) -> Option<StudentId> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.current().is_some()
    }

    /// Persist `id` and make it current.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the identifier cannot be stored; the cached value
    /// is left unchanged in that case.
    pub async fn sign_in(&self, id: StudentId) -> Result<(), StorageError> {
        self.repo.save_student_id(&id).await?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(id);
        Ok(())
    }

    /// Forget the student.
    ///
    /// The in-memory value is cleared even when the repository write fails.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the persisted value cannot be removed.
    pub async fn sign_out(&self) -> Result<(), StorageError> {
        self.current
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        self.repo.clear_student_id().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::InMemoryRepository;

    #[tokio::test]
    async fn sign_in_persists_and_survives_reload() {
        let repo: Arc<dyn SessionRepository> = Arc::new(InMemoryRepository::new());
        let session = StudentSession::load(Arc::clone(&repo)).await.unwrap();
        assert!(!session.is_signed_in());

        let id = StudentId::new("abc").unwrap();
        session.sign_in(id.clone()).await.unwrap();
        assert_eq!(session.current(), Some(id.clone()));

        let reloaded = StudentSession::load(repo).await.unwrap();
        assert_eq!(reloaded.current(), Some(id));
    }

    #[tokio::test]
    async fn sign_out_clears_cache_and_store() {
        let repo: Arc<dyn SessionRepository> = Arc::new(InMemoryRepository::new());
        let session = StudentSession::load(Arc::clone(&repo)).await.unwrap();
        session
            .sign_in(StudentId::new("abc").unwrap())
            .await
            .unwrap();

        session.sign_out().await.unwrap();
        assert_eq!(session.current(), None);
        assert_eq!(StudentSession::load(repo).await.unwrap().current(), None);
    }
}
