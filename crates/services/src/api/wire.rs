//! JSON shapes exchanged with the backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use quiz_core::model::{
    Chapter, ChapterId, Question, QuestionId, QuizId, QuizResult, QuizSummary, ResultId,
    StudentId, Textbook, TextbookId, TimeEntry, in_enumeration_order,
};

#[derive(Debug, Deserialize)]
pub(super) struct QuizDto {
    id: QuizId,
    title: String,
    #[serde(default)]
    created_at: String,
    #[serde(default)]
    question_count: u32,
}

impl From<QuizDto> for QuizSummary {
    fn from(dto: QuizDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            created_at: dto.created_at,
            question_count: dto.question_count,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct TextbookDto {
    id: TextbookId,
    title: String,
    #[serde(default)]
    chapters: u32,
}

impl From<TextbookDto> for Textbook {
    fn from(dto: TextbookDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            chapter_count: dto.chapters,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct ChapterDto {
    id: ChapterId,
    title: String,
    number: u32,
    #[serde(default)]
    questions: u32,
}

impl From<ChapterDto> for Chapter {
    fn from(dto: ChapterDto) -> Self {
        Self {
            id: dto.id,
            title: dto.title,
            number: dto.number,
            question_count: dto.questions,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct CreateQuizBody {
    pub chapter_id: ChapterId,
    pub num_questions: u32,
    pub time_limit: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct CreateQuizResponse {
    pub quiz_id: QuizId,
}

#[derive(Debug, Deserialize)]
pub(super) struct QuestionDto {
    id: QuestionId,
    text: String,
    options: Vec<String>,
    correct_answer: String,
}

impl From<QuestionDto> for Question {
    fn from(dto: QuestionDto) -> Self {
        Self {
            id: dto.id,
            text: dto.text,
            options: dto.options,
            correct_answer: dto.correct_answer,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct SubmitBody<'a> {
    pub quiz_id: QuizId,
    pub student_id: &'a str,
    pub answers: &'a BTreeMap<QuestionId, String>,
    pub question_times: &'a BTreeMap<usize, f64>,
}

#[derive(Debug, Deserialize)]
pub(super) struct SubmitResponse {
    pub result_id: ResultId,
}

/// Result payload. Value types are loose on purpose: the backend stores whatever
/// the client posted, so nothing here may reject the whole document.
#[derive(Debug, Deserialize)]
pub(super) struct ResultDto {
    id: ResultId,
    quiz_id: QuizId,
    #[serde(default)]
    student_id: Value,
    score: f64,
    #[serde(default)]
    answers: Option<Map<String, Value>>,
    #[serde(default)]
    question_times: Value,
    #[serde(default)]
    completed_at: String,
}

impl From<ResultDto> for QuizResult {
    fn from(dto: ResultDto) -> Self {
        let answers = in_enumeration_order(dto.answers.unwrap_or_default())
            .into_iter()
            .map(|(question_id, answer)| (question_id, value_to_text(answer)))
            .collect();
        let question_times = match dto.question_times {
            Value::Object(times) => in_enumeration_order(times)
                .into_iter()
                .map(|(key, value)| TimeEntry::new(key, value.as_f64()))
                .collect(),
            _ => Vec::new(),
        };

        Self {
            id: dto.id,
            quiz_id: dto.quiz_id,
            student_id: value_to_text(dto.student_id),
            score: dto.score,
            answers,
            question_times,
            completed_at: dto.completed_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct RegisterBody<'a> {
    pub name: &'a str,
    pub email: &'a str,
}

#[derive(Debug, Deserialize)]
pub(super) struct RegisterResponse {
    #[serde(default)]
    student_id: Value,
}

impl RegisterResponse {
    pub(super) fn into_student_id(self) -> Option<StudentId> {
        match self.student_id {
            Value::String(raw) => StudentId::new(raw),
            Value::Number(raw) => StudentId::new(raw.to_string()),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(super) struct UploadResponse {
    #[serde(default)]
    pub chapters: u32,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBody {
    pub error: Option<String>,
}

fn value_to_text(value: Value) -> String {
    match value {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
