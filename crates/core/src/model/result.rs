use chrono::{DateTime, Utc};

use crate::model::ids::{QuizId, ResultId};
use crate::model::quiz::parse_timestamp;

/// One entry of the backend's time map, in key enumeration order.
///
/// `seconds` is `None` when the backend sent something that is not a number.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeEntry {
    pub key: String,
    pub seconds: Option<f64>,
}

impl TimeEntry {
    #[must_use]
    pub fn new(key: impl Into<String>, seconds: Option<f64>) -> Self {
        Self {
            key: key.into(),
            seconds,
        }
    }
}

/// A scored submission as stored by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizResult {
    pub id: ResultId,
    pub quiz_id: QuizId,
    pub student_id: String,
    /// Percentage in `[0, 100]`.
    pub score: f64,
    /// `(question id, answer)` pairs in key enumeration order.
    pub answers: Vec<(String, String)>,
    pub question_times: Vec<TimeEntry>,
    pub completed_at: String,
}

impl QuizResult {
    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        parse_timestamp(&self.completed_at)
    }

    /// Numeric time recorded under `key`, if any.
    #[must_use]
    pub fn seconds_for(&self, key: &str) -> Option<f64> {
        self.question_times
            .iter()
            .find(|entry| entry.key == key)
            .and_then(|entry| entry.seconds)
    }
}

/// Reorder object entries into key enumeration order: canonical array-index keys
/// ascending, then every other key in its original order.
///
/// `"10"` sorts after `"2"`; `"02"`, `"+1"` and `"a"` are plain keys and keep
/// their place relative to each other.
#[must_use]
pub fn in_enumeration_order<T>(entries: impl IntoIterator<Item = (String, T)>) -> Vec<(String, T)> {
    let (mut ordered, named): (Vec<_>, Vec<_>) = entries
        .into_iter()
        .partition(|(key, _)| array_index(key).is_some());
    ordered.sort_by_key(|(key, _)| array_index(key));
    ordered.extend(named);
    ordered
}

fn array_index(key: &str) -> Option<u32> {
    let index = key.parse::<u32>().ok()?;
    (index != u32::MAX && index.to_string() == key).then_some(index)
}
