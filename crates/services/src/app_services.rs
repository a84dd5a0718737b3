use std::sync::Arc;

use storage::Storage;

use crate::Clock;
use crate::api::{HttpApi, QuizzoApi};
use crate::config::ApiConfig;
use crate::error::AppServicesError;
use crate::quiz_service::QuizService;
use crate::registration_service::RegistrationService;
use crate::result_service::ResultService;
use crate::student_session::StudentSession;
use crate::textbook_service::TextbookService;
use crate::upload_service::UploadService;

/// Assembles app-facing services around one API client and one session.
#[derive(Clone)]
pub struct AppServices {
    session: StudentSession,
    registration: Arc<RegistrationService>,
    quizzes: Arc<QuizService>,
    textbooks: Arc<TextbookService>,
    results: Arc<ResultService>,
    uploads: Arc<UploadService>,
}

impl AppServices {
    /// Build services backed by `SQLite` session storage and the HTTP backend.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        api_config: ApiConfig,
        clock: Clock,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        let api: Arc<dyn QuizzoApi> = Arc::new(HttpApi::new(api_config));
        Self::new(clock, api, &storage).await
    }

    /// Build services from an explicit API client and storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the persisted session cannot be read.
    pub async fn new(
        clock: Clock,
        api: Arc<dyn QuizzoApi>,
        storage: &Storage,
    ) -> Result<Self, AppServicesError> {
        let session = StudentSession::load(Arc::clone(&storage.sessions)).await?;

        Ok(Self {
            registration: Arc::new(RegistrationService::new(Arc::clone(&api), session.clone())),
            quizzes: Arc::new(QuizService::new(clock, Arc::clone(&api), session.clone())),
            textbooks: Arc::new(TextbookService::new(Arc::clone(&api))),
            results: Arc::new(ResultService::new(Arc::clone(&api))),
            uploads: Arc::new(UploadService::new(api)),
            session,
        })
    }

    #[must_use]
    pub fn session(&self) -> StudentSession {
        self.session.clone()
    }

    #[must_use]
    pub fn registration(&self) -> Arc<RegistrationService> {
        Arc::clone(&self.registration)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn textbooks(&self) -> Arc<TextbookService> {
        Arc::clone(&self.textbooks)
    }

    #[must_use]
    pub fn results(&self) -> Arc<ResultService> {
        Arc::clone(&self.results)
    }

    #[must_use]
    pub fn uploads(&self) -> Arc<UploadService> {
        Arc::clone(&self.uploads)
    }
}
