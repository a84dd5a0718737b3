use crate::model::ids::{ChapterId, TextbookId};

/// Fixed quiz shape requested when starting a quiz from a chapter.
pub const DEFAULT_QUIZ_QUESTIONS: u32 = 10;
pub const DEFAULT_QUIZ_TIME_LIMIT: u32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Textbook {
    pub id: TextbookId,
    pub title: String,
    pub chapter_count: u32,
}

impl Textbook {
    #[must_use]
    pub fn option_label(&self) -> String {
        format!("{} ({} chapters)", self.title, self.chapter_count)
    }
}

/// A chapter scoped to one textbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: ChapterId,
    pub title: String,
    pub number: u32,
    pub question_count: u32,
}

impl Chapter {
    #[must_use]
    pub fn heading(&self) -> String {
        format!("Chapter {}: {}", self.number, self.title)
    }
}

/// Request to create a quiz from a chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuizRequest {
    pub chapter_id: ChapterId,
    pub num_questions: u32,
    pub time_limit: u32,
}

impl QuizRequest {
    #[must_use]
    pub fn for_chapter(chapter_id: ChapterId) -> Self {
        Self {
            chapter_id,
            num_questions: DEFAULT_QUIZ_QUESTIONS,
            time_limit: DEFAULT_QUIZ_TIME_LIMIT,
        }
    }
}
