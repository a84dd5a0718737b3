use std::sync::Arc;

use crate::api::{PdfUpload, QuizzoApi, UploadReceipt};
use crate::error::UploadError;

#[derive(Clone)]
pub struct UploadService {
    api: Arc<dyn QuizzoApi>,
}

impl UploadService {
    #[must_use]
    pub fn new(api: Arc<dyn QuizzoApi>) -> Self {
        Self { api }
    }

    /// Upload a textbook PDF for chapter extraction.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::NoFile` when nothing (or an empty file) was picked,
    /// and `UploadError::Request` when the upload fails.
    pub async fn upload(&self, file: Option<PdfUpload>) -> Result<UploadReceipt, UploadError> {
        let file = file
            .filter(|file| !file.file_name.trim().is_empty() && !file.bytes.is_empty())
            .ok_or(UploadError::NoFile)?;
        let file_name = file.file_name.clone();

        let receipt = self
            .api
            .upload_textbook(file)
            .await
            .inspect_err(|err| tracing::warn!(%file_name, error = %err, "textbook upload failed"))?;

        tracing::info!(%file_name, chapters = receipt.chapters, "textbook uploaded");
        Ok(receipt)
    }
}
