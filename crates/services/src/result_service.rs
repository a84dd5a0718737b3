use std::sync::Arc;

use quiz_core::model::ResultId;
use quiz_core::report::ResultReport;

use crate::api::QuizzoApi;
use crate::error::RequestError;

#[derive(Clone)]
pub struct ResultService {
    api: Arc<dyn QuizzoApi>,
}

impl ResultService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizzoApi>) -> Self {
        Self { api }
    }

    /// Fetch a stored result and build its display report. `Ok(None)` when the
    /// backend returned no result body.
    ///
    /// # Errors
    ///
    /// Returns `RequestError` if the result cannot be fetched.
    pub async fn report(&self, result_id: ResultId) -> Result<Option<ResultReport>, RequestError> {
        let result = self
            .api
            .get_result(result_id)
            .await
            .inspect_err(|err| tracing::warn!(%result_id, error = %err, "failed to load result"))?;
        let Some(result) = result else {
            tracing::info!(%result_id, "result body was empty");
            return Ok(None);
        };

        let dropped = result
            .question_times
            .iter()
            .filter(|entry| entry.seconds.is_none())
            .count();
        if dropped > 0 {
            tracing::debug!(%result_id, dropped, "ignoring non-numeric question times");
        }

        Ok(Some(ResultReport::from_result(&result)))
    }
}
