use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use quiz_core::attempt::AttemptSubmission;
use quiz_core::model::{
    Chapter, Question, QuizId, QuizRequest, QuizResult, QuizSummary, Registration, ResultId,
    StudentId, Textbook, TextbookId,
};

use super::wire::{
    ChapterDto, CreateQuizBody, CreateQuizResponse, ErrorBody, QuestionDto, QuizDto,
    RegisterBody, RegisterResponse, ResultDto, SubmitBody, SubmitResponse, TextbookDto,
    UploadResponse,
};
use super::{PdfUpload, QuizzoApi, UploadReceipt};
use crate::config::ApiConfig;
use crate::error::RequestError;

/// `QuizzoApi` over HTTP. Uses the transport's default timeouts.
#[derive(Clone)]
pub struct HttpApi {
    client: Client,
    config: ApiConfig,
}

impl HttpApi {
    #[must_use]
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");
        let response = self.client.get(url).send().await?;
        decode(response).await
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, RequestError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "POST");
        let response = self.client.post(url).json(body).send().await?;
        decode(response).await
    }
}

/// Decode a success body, or turn a non-2xx response into `RequestError::Status`
/// carrying the server's `error` message when the body has one.
async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let status = response.status();
    if !status.is_success() {
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error);
        return Err(RequestError::Status { status, message });
    }
    Ok(response.json::<T>().await?)
}

#[async_trait]
impl QuizzoApi for HttpApi {
    async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, RequestError> {
        let quizzes: Vec<QuizDto> = self.get_json("/quizzes").await?;
        Ok(quizzes.into_iter().map(Into::into).collect())
    }

    async fn list_textbooks(&self) -> Result<Vec<Textbook>, RequestError> {
        let textbooks: Vec<TextbookDto> = self.get_json("/api/pdf/textbooks").await?;
        Ok(textbooks.into_iter().map(Into::into).collect())
    }

    async fn list_chapters(&self, textbook_id: TextbookId) -> Result<Vec<Chapter>, RequestError> {
        let path = format!("/api/pdf/textbooks/{textbook_id}/chapters");
        let chapters: Vec<ChapterDto> = self.get_json(&path).await?;
        Ok(chapters.into_iter().map(Into::into).collect())
    }

    async fn create_quiz(&self, request: QuizRequest) -> Result<QuizId, RequestError> {
        let body = CreateQuizBody {
            chapter_id: request.chapter_id,
            num_questions: request.num_questions,
            time_limit: request.time_limit,
        };
        let created: CreateQuizResponse = self.post_json("/api/quiz/create", &body).await?;
        Ok(created.quiz_id)
    }

    async fn quiz_questions(&self, quiz_id: QuizId) -> Result<Vec<Question>, RequestError> {
        let path = format!("/quizzes/{quiz_id}/questions");
        let questions: Vec<QuestionDto> = self.get_json(&path).await?;
        Ok(questions.into_iter().map(Into::into).collect())
    }

    async fn submit_quiz(&self, submission: &AttemptSubmission) -> Result<ResultId, RequestError> {
        let body = SubmitBody {
            quiz_id: submission.quiz_id,
            student_id: submission.student_id.as_str(),
            answers: &submission.answers,
            question_times: &submission.question_times,
        };
        let submitted: SubmitResponse = self.post_json("/submit-quiz", &body).await?;
        Ok(submitted.result_id)
    }

    async fn get_result(&self, result_id: ResultId) -> Result<Option<QuizResult>, RequestError> {
        let path = format!("/results/{result_id}");
        let result: Option<ResultDto> = self.get_json(&path).await?;
        Ok(result.map(Into::into))
    }

    async fn register(
        &self,
        registration: &Registration,
    ) -> Result<Option<StudentId>, RequestError> {
        let body = RegisterBody {
            name: registration.name(),
            email: registration.email(),
        };
        let registered: RegisterResponse = self.post_json("/register", &body).await?;
        Ok(registered.into_student_id())
    }

    async fn upload_textbook(&self, upload: PdfUpload) -> Result<UploadReceipt, RequestError> {
        let url = self.config.endpoint("/api/pdf/upload");
        let part = Part::bytes(upload.bytes)
            .file_name(upload.file_name)
            .mime_str("application/pdf")?;
        let form = Form::new().part("file", part);
        tracing::debug!(%url, "POST multipart");
        let response = self.client.post(url).multipart(form).send().await?;
        let uploaded: UploadResponse = decode(response).await?;
        Ok(UploadReceipt {
            chapters: uploaded.chapters,
        })
    }
}
