use chrono::{DateTime, Utc};

use crate::model::ids::{QuestionId, QuizId};

/// A quiz as it appears in the flat listing.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub id: QuizId,
    pub title: String,
    /// Raw creation timestamp as sent by the backend.
    pub created_at: String,
    pub question_count: u32,
}

impl QuizSummary {
    /// Creation date for display, or the raw value when it is not a timestamp.
    #[must_use]
    pub fn created_on(&self) -> String {
        parse_timestamp(&self.created_at).map_or_else(
            || self.created_at.clone(),
            |at| at.format("%Y-%m-%d").to_string(),
        )
    }
}

/// One multiple-choice question in presentation order.
///
/// `correct_answer` is part of the wire contract but scoring happens server-side,
/// so nothing in the client reads it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub id: QuestionId,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Question {
    #[must_use]
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|candidate| candidate == option)
    }
}

/// Accepts RFC 3339 as well as the naive ISO form (`2024-01-02T03:04:05.123456`)
/// the backend emits without an offset.
pub(crate) fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(at) = DateTime::parse_from_rfc3339(raw) {
        return Some(at.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
