use std::sync::Arc;

use quiz_core::model::{Chapter, ChapterId, QuizId, QuizRequest, Textbook, TextbookId};

use crate::api::QuizzoApi;
use crate::error::RequestError;

/// Textbook -> chapter browsing and chapter quiz creation.
#[derive(Clone)]
pub struct TextbookService {
    api: Arc<dyn QuizzoApi>,
}

impl TextbookService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizzoApi>) -> Self {
        Self { api }
    }

    /// # Errors
    ///
    /// Returns `RequestError` if the textbooks cannot be fetched.
    pub async fn list_textbooks(&self) -> Result<Vec<Textbook>, RequestError> {
        self.api
            .list_textbooks()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load textbooks"))
    }

    /// # Errors
    ///
    /// Returns `RequestError` if the chapters cannot be fetched.
    pub async fn list_chapters(&self, textbook_id: TextbookId) -> Result<Vec<Chapter>, RequestError> {
        self.api
            .list_chapters(textbook_id)
            .await
            .inspect_err(|err| tracing::warn!(%textbook_id, error = %err, "failed to load chapters"))
    }

    /// Create a quiz for a chapter with the fixed default shape.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the quiz cannot be created.
    pub async fn start_chapter_quiz(&self, chapter_id: ChapterId) -> Result<QuizId, RequestError> {
        let quiz_id = self
            .api
            .create_quiz(QuizRequest::for_chapter(chapter_id))
            .await
            .inspect_err(|err| tracing::warn!(%chapter_id, error = %err, "failed to create quiz"))?;
        tracing::info!(%chapter_id, %quiz_id, "chapter quiz created");
        Ok(quiz_id)
    }
}
