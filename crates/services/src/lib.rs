#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod config;
pub mod error;
pub mod quiz_service;
pub mod registration_service;
pub mod result_service;
pub mod student_session;
pub mod textbook_service;
pub mod upload_service;

pub use quiz_core::Clock;
pub use reqwest::StatusCode;

pub use api::{HttpApi, PdfUpload, QuizzoApi, UploadReceipt};
pub use app_services::AppServices;
pub use config::ApiConfig;
pub use error::{
    AppServicesError, ConfigError, RegisterError, RequestError, SubmitError, UploadError,
};
pub use quiz_service::QuizService;
pub use registration_service::RegistrationService;
pub use result_service::ResultService;
pub use student_session::StudentSession;
pub use textbook_service::TextbookService;
pub use upload_service::UploadService;
