use std::sync::Arc;

use quiz_core::model::{Registration, StudentId};

use crate::api::QuizzoApi;
use crate::error::RegisterError;
use crate::student_session::StudentSession;

#[derive(Clone)]
pub struct RegistrationService {
    api: Arc<dyn QuizzoApi>,
    session: StudentSession,
}

impl RegistrationService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizzoApi>, session: StudentSession) -> Self {
        Self { api, session }
    }

    /// Register a student and remember the identifier the backend hands out.
    ///
    /// Blank fields fail before any request is made.
    ///
    /// # Errors
    ///
    /// Returns `RegisterError::Invalid` for blank fields,
    /// `RegisterError::MissingStudentId` when the backend answers without an id,
    /// `RegisterError::Request` for transport or HTTP failures, and
    /// `RegisterError::Session` if the id cannot be persisted.
    pub async fn register(&self, name: &str, email: &str) -> Result<StudentId, RegisterError> {
        let registration = Registration::new(name, email)?;

        let student_id = self
            .api
            .register(&registration)
            .await
            .inspect_err(|err| tracing::warn!(error = %err, "registration request failed"))?
            .ok_or_else(|| {
                tracing::warn!("registration response carried no student id");
                RegisterError::MissingStudentId
            })?;

        self.session.sign_in(student_id.clone()).await?;
        tracing::info!(student_id = %student_id, "student registered");
        Ok(student_id)
    }
}
