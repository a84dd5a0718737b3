use dioxus::prelude::*;
use services::{RequestError, StatusCode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    Unknown,
    /// The backend could not be reached at all.
    Offline,
    NotFound,
}

/// What a page was fetching or creating when it failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    Quizzes,
    Textbooks,
    Chapters,
    ChapterQuiz,
    Questions,
    Results,
}

impl Subject {
    fn failure_text(self) -> &'static str {
        match self {
            Self::Quizzes => "Failed to load quizzes",
            Self::Textbooks => "Error fetching textbooks",
            Self::Chapters => "Error fetching chapters",
            Self::ChapterQuiz => "Error creating quiz",
            Self::Questions => "Failed to load questions",
            Self::Results => "Failed to load results",
        }
    }
}

impl ViewError {
    #[must_use]
    pub fn from_request(err: &RequestError) -> Self {
        match err {
            RequestError::Transport(_) => Self::Offline,
            RequestError::Status { status, .. } if *status == StatusCode::NOT_FOUND => Self::NotFound,
            _ => Self::Unknown,
        }
    }

    /// Text shown when loading `subject` failed. A missing record reads the same
    /// as any other failure.
    #[must_use]
    pub fn message(&self, subject: Subject) -> String {
        match self {
            Self::Offline => format!(
                "{}: could not reach the quiz server.",
                subject.failure_text()
            ),
            Self::Unknown | Self::NotFound => subject.failure_text().to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ViewState<T> {
    Idle,
    Loading,
    Ready(T),
    Error(ViewError),
}

#[must_use]
pub fn view_state_from_resource<T: Clone>(
    resource: &Resource<Result<T, ViewError>>,
) -> ViewState<T> {
    match resource.state().cloned() {
        UseResourceState::Pending => ViewState::Loading,
        UseResourceState::Ready => match resource.value().read().as_ref() {
            Some(Ok(data)) => ViewState::Ready(data.clone()),
            Some(Err(err)) => ViewState::Error(*err),
            None => ViewState::Error(ViewError::Unknown),
        },
        UseResourceState::Paused | UseResourceState::Stopped => ViewState::Idle,
    }
}
