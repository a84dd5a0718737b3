mod home;
mod question_timer;
mod quiz;
mod register;
mod results;
mod state;
mod upload;

#[cfg(test)]
mod intent_smoke;
#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use home::HomeView;
pub use question_timer::{QuestionTimer, use_question_timer};
pub use quiz::QuizView;
pub use register::RegisterView;
pub use results::ResultsView;
pub use state::{Subject, ViewError, ViewState, view_state_from_resource};
pub use upload::UploadView;
