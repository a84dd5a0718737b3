mod ids;
mod listing;
mod quiz;
mod result;
mod student;
mod textbook;

pub use ids::{ChapterId, ParseIdError, QuestionId, QuizId, ResultId, StudentId, TextbookId};

pub use listing::{ListingMode, ListingModeError};
pub use quiz::{Question, QuizSummary};
pub use result::{QuizResult, TimeEntry, in_enumeration_order};
pub use student::{Registration, RegistrationError};
pub use textbook::{Chapter, QuizRequest, Textbook};
