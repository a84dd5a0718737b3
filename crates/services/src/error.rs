//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use quiz_core::attempt::AttemptError;
use quiz_core::model::RegistrationError;
use storage::StorageError;
use storage::sqlite::SqliteInitError;

/// A failed call to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RequestError {
    #[error("request failed with status {status}")]
    Status {
        status: StatusCode,
        /// The `error` field of the response body, when the server sent one.
        message: Option<String>,
    },
    #[error("request could not be sent: {0}")]
    Transport(String),
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl RequestError {
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }

    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Status { message, .. } => message.as_deref(),
            Self::Transport(_) | Self::Decode(_) => None,
        }
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Status {
                status,
                message: None,
            }
        } else {
            Self::Transport(err.to_string())
        }
    }
}

/// Errors emitted by `RegistrationService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegisterError {
    #[error(transparent)]
    Invalid(#[from] RegistrationError),
    /// The backend answered successfully but did not hand out an identifier.
    #[error("registration response did not contain a student id")]
    MissingStudentId,
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Session(#[from] StorageError),
}

/// Errors emitted when submitting an attempt.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SubmitError {
    #[error("no registered student")]
    NoSession,
    #[error(transparent)]
    Attempt(#[from] AttemptError),
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Errors emitted by `UploadService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UploadError {
    #[error("no file selected")]
    NoFile,
    #[error(transparent)]
    Request(#[from] RequestError),
}

/// Invalid client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid backend base url {raw}: {reason}")]
    InvalidBaseUrl { raw: String, reason: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}
