//! State of one student working through a quiz.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::{Question, QuestionId, QuizId, StudentId};
use crate::time::seconds_between;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum AttemptError {
    #[error("quiz has no questions")]
    NoQuestions,

    #[error("current question has no selected answer")]
    Unanswered,
}

/// Everything posted to the backend when the student submits.
#[derive(Debug, Clone, PartialEq)]
pub struct AttemptSubmission {
    pub quiz_id: QuizId,
    pub student_id: StudentId,
    /// Selected option per answered question. Unanswered questions are absent.
    pub answers: BTreeMap<QuestionId, String>,
    /// Seconds spent per question index.
    pub question_times: BTreeMap<usize, f64>,
}

/// Navigation, answers and dwell times for a single attempt.
///
/// `current_index` always stays within `[0, len - 1]`. Dwell time is sampled, not
/// measured on navigation: only `record_dwell` writes times, and it overwrites the
/// entry for the current index with the span since the question was (re)entered.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizAttempt {
    quiz_id: QuizId,
    questions: Vec<Question>,
    current_index: usize,
    answers: BTreeMap<QuestionId, String>,
    times: BTreeMap<usize, f64>,
    entered_at: DateTime<Utc>,
}

impl QuizAttempt {
    /// Start an attempt on the first question.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::NoQuestions` for an empty quiz.
    pub fn start(
        quiz_id: QuizId,
        questions: Vec<Question>,
        now: DateTime<Utc>,
    ) -> Result<Self, AttemptError> {
        if questions.is_empty() {
            return Err(AttemptError::NoQuestions);
        }
        Ok(Self {
            quiz_id,
            questions,
            current_index: 0,
            answers: BTreeMap::new(),
            times: BTreeMap::new(),
            entered_at: now,
        })
    }

    #[must_use]
    pub fn quiz_id(&self) -> QuizId {
        self.quiz_id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn current(&self) -> &Question {
        &self.questions[self.current_index]
    }

    #[must_use]
    pub fn entered_at(&self) -> DateTime<Utc> {
        self.entered_at
    }

    #[must_use]
    pub fn position_label(&self) -> String {
        format!("Question {} of {}", self.current_index + 1, self.len())
    }

    #[must_use]
    pub fn selected_answer(&self) -> Option<&str> {
        self.answers.get(&self.current().id).map(String::as_str)
    }

    /// Record `option` for the current question. Options the question does not
    /// offer are ignored.
    pub fn select_answer(&mut self, option: &str) -> bool {
        let question = self.current();
        if !question.has_option(option) {
            return false;
        }
        let id = question.id;
        self.answers.insert(id, option.to_string());
        true
    }

    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.current_index > 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.len()
    }

    /// Whether "Next" (or "Submit" on the last question) is enabled.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        self.selected_answer().is_some()
    }

    /// Move forward one question. No-op on the last question or while the
    /// current question is unanswered.
    pub fn next(&mut self, now: DateTime<Utc>) -> bool {
        if self.is_last() || !self.can_advance() {
            return false;
        }
        self.enter(self.current_index + 1, now);
        true
    }

    /// Move back one question. No-op on the first question.
    pub fn previous(&mut self, now: DateTime<Utc>) -> bool {
        if !self.can_go_previous() {
            return false;
        }
        self.enter(self.current_index - 1, now);
        true
    }

    /// Overwrite the current question's time with the span since it was entered.
    pub fn record_dwell(&mut self, now: DateTime<Utc>) -> f64 {
        let seconds = seconds_between(self.entered_at, now);
        self.times.insert(self.current_index, seconds);
        seconds
    }

    #[must_use]
    pub fn answers(&self) -> &BTreeMap<QuestionId, String> {
        &self.answers
    }

    #[must_use]
    pub fn times(&self) -> &BTreeMap<usize, f64> {
        &self.times
    }

    /// Snapshot answers and times for submission.
    ///
    /// # Errors
    ///
    /// Returns `AttemptError::Unanswered` if the current question has no answer.
    pub fn submission(&self, student_id: StudentId) -> Result<AttemptSubmission, AttemptError> {
        if !self.can_advance() {
            return Err(AttemptError::Unanswered);
        }
        Ok(AttemptSubmission {
            quiz_id: self.quiz_id,
            student_id,
            answers: self.answers.clone(),
            question_times: self.times.clone(),
        })
    }

    fn enter(&mut self, index: usize, now: DateTime<Utc>) {
        self.current_index = index.min(self.len() - 1);
        self.entered_at = now;
    }
}
