use std::sync::Arc;

use quiz_core::Clock;
use quiz_core::attempt::{AttemptError, QuizAttempt};
use quiz_core::model::{QuizId, QuizSummary, ResultId};

use crate::api::QuizzoApi;
use crate::error::{RequestError, SubmitError};
use crate::student_session::StudentSession;

/// Flat quiz listing and the quiz-taking round trip.
#[derive(Clone)]
pub struct QuizService {
    clock: Clock,
    api: Arc<dyn QuizzoApi>,
    session: StudentSession,
}

impl QuizService {
    #[must_use]
    pub fn new(clock: Clock, api: Arc<dyn QuizzoApi>, session: StudentSession) -> Self {
        Self {
            clock,
            api,
            session,
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// # Errors
    ///
    /// Returns `RequestError` if the listing cannot be fetched.
    pub async fn list_quizzes(&self) -> Result<Vec<QuizSummary>, RequestError> {
        self.api
            .list_quizzes()
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "failed to load quizzes"))
    }

    /// Fetch the ordered questions and start an attempt on the first one.
    ///
    /// Returns `Ok(None)` when the quiz has no questions.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the questions cannot be fetched.
    pub async fn start_attempt(&self, quiz_id: QuizId) -> Result<Option<QuizAttempt>, RequestError> {
        let questions = self
            .api
            .quiz_questions(quiz_id)
            .await
            .inspect_err(|err| tracing::warn!(%quiz_id, error = %err, "failed to load questions"))?;

        match QuizAttempt::start(quiz_id, questions, self.clock.now()) {
            Ok(attempt) => Ok(Some(attempt)),
            Err(AttemptError::NoQuestions) => Ok(None),
            Err(err) => {
                tracing::warn!(%quiz_id, error = %err, "could not start attempt");
                Ok(None)
            }
        }
    }

    /// Post every answer and time recorded so far.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::NoSession` when nobody is registered,
    /// `SubmitError::Attempt` if the current question is unanswered, and
    /// `SubmitError::Request` when the backend call fails.
    pub async fn submit(&self, attempt: &QuizAttempt) -> Result<ResultId, SubmitError> {
        let student_id = self.session.current().ok_or(SubmitError::NoSession)?;
        let submission = attempt.submission(student_id)?;

        let result_id = self
            .api
            .submit_quiz(&submission)
            .await
            .inspect_err(|err| {
                tracing::warn!(quiz_id = %submission.quiz_id, error = %err, "quiz submission failed");
            })?;

        tracing::info!(quiz_id = %submission.quiz_id, %result_id, answered = submission.answers.len(), "quiz submitted");
        Ok(result_id)
    }
}
