use std::sync::Arc;

use quiz_core::model::ListingMode;
use services::{
    QuizService, RegistrationService, ResultService, StudentSession, TextbookService,
    UploadService,
};

pub trait UiApp: Send + Sync {
    fn listing_mode(&self) -> ListingMode;
    fn session(&self) -> StudentSession;

    fn registration(&self) -> Arc<RegistrationService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn textbooks(&self) -> Arc<TextbookService>;
    fn results(&self) -> Arc<ResultService>;
    fn uploads(&self) -> Arc<UploadService>;
}

#[derive(Clone)]
pub struct AppContext {
    listing_mode: ListingMode,
    session: StudentSession,

    registration: Arc<RegistrationService>,
    quizzes: Arc<QuizService>,
    textbooks: Arc<TextbookService>,
    results: Arc<ResultService>,
    uploads: Arc<UploadService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            listing_mode: app.listing_mode(),
            session: app.session(),
            registration: app.registration(),
            quizzes: app.quizzes(),
            textbooks: app.textbooks(),
            results: app.results(),
            uploads: app.uploads(),
        }
    }

    #[must_use]
    pub fn listing_mode(&self) -> ListingMode {
        self.listing_mode
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

// This context is provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
