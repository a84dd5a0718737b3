use quiz_core::model::{Chapter, ChapterId, QuizId, QuizSummary, Textbook, TextbookId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub id: QuizId,
    pub title: String,
    pub questions_label: String,
    pub created_label: String,
}

impl From<&QuizSummary> for QuizCardVm {
    fn from(quiz: &QuizSummary) -> Self {
        Self {
            id: quiz.id,
            title: quiz.title.clone(),
            questions_label: format!("Questions: {}", quiz.question_count),
            created_label: format!("Created: {}", quiz.created_on()),
        }
    }
}

#[must_use]
pub fn map_quiz_cards(quizzes: &[QuizSummary]) -> Vec<QuizCardVm> {
    quizzes.iter().map(QuizCardVm::from).collect()
}

/// Entry of the textbook selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TextbookOptionVm {
    pub id: TextbookId,
    pub label: String,
}

#[must_use]
pub fn map_textbook_options(textbooks: &[Textbook]) -> Vec<TextbookOptionVm> {
    textbooks
        .iter()
        .map(|book| TextbookOptionVm {
            id: book.id,
            label: book.option_label(),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChapterCardVm {
    pub id: ChapterId,
    pub heading: String,
    pub questions_label: String,
}

#[must_use]
pub fn map_chapter_cards(chapters: &[Chapter]) -> Vec<ChapterCardVm> {
    chapters
        .iter()
        .map(|chapter| ChapterCardVm {
            id: chapter.id,
            heading: chapter.heading(),
            questions_label: format!("{} questions available", chapter.question_count),
        })
        .collect()
}
