//! Backend REST contract.

mod http;
mod wire;

use async_trait::async_trait;

use quiz_core::attempt::AttemptSubmission;
use quiz_core::model::{
    Chapter, Question, QuizId, QuizRequest, QuizResult, QuizSummary, Registration, ResultId,
    StudentId, Textbook, TextbookId,
};

use crate::error::RequestError;

pub use http::HttpApi;

/// A PDF picked by the student, ready for multipart upload.
#[derive(Clone, PartialEq, Eq)]
pub struct PdfUpload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

impl std::fmt::Debug for PdfUpload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PdfUpload")
            .field("file_name", &self.file_name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// What the backend reports after ingesting a textbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadReceipt {
    pub chapters: u32,
}

/// One method per backend endpoint. Each call issues exactly one request; there is
/// no retry and no caching.
#[async_trait]
pub trait QuizzoApi: Send + Sync {
    /// `GET /quizzes`
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, RequestError>;

    /// `GET /api/pdf/textbooks`
    async fn list_textbooks(&self) -> Result<Vec<Textbook>, RequestError>;

    /// `GET /api/pdf/textbooks/{id}/chapters`
    async fn list_chapters(&self, textbook_id: TextbookId) -> Result<Vec<Chapter>, RequestError>;

    /// `POST /api/quiz/create`
    async fn create_quiz(&self, request: QuizRequest) -> Result<QuizId, RequestError>;

    /// `GET /quizzes/{id}/questions`
    async fn quiz_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, RequestError>;

    /// `POST /submit-quiz`
    async fn submit_quiz(&self, submission: &AttemptSubmission) -> Result<ResultId, RequestError>;

    /// `GET /results/{id}`. `Ok(None)` means the backend answered with an empty body.
    async fn get_result(&self, result_id: ResultId) -> Result<Option<QuizResult>, RequestError>;

    /// `POST /register`. `Ok(None)` means the call succeeded but carried no id.
    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<Option<StudentId>, RequestError>;

    /// `POST /api/pdf/upload` as multipart form data.
    async fn upload_textbook(&self, upload: PdfUpload) -> Result<UploadReceipt, RequestError>;
}
