//! Display-ready breakdown of a scored result.

use chrono::{DateTime, Utc};

use crate::model::QuizResult;

/// One point of the time-per-question chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub label: String,
    pub seconds: f64,
}

/// One line of the "Your Answers" list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRow {
    pub label: String,
    pub answer: String,
    pub time_label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultReport {
    pub score_label: String,
    pub completed_at: Option<DateTime<Utc>>,
    pub completed_at_raw: String,
    pub chart: Vec<ChartPoint>,
    pub answers: Vec<AnswerRow>,
}

impl ResultReport {
    /// Build the report for a result.
    ///
    /// Non-numeric time entries are dropped from the chart. Labels are assigned by
    /// position among the surviving entries, following the key order of the time
    /// map, not any canonical question order.
    #[must_use]
    pub fn from_result(result: &QuizResult) -> Self {
        let chart = result
            .question_times
            .iter()
            .filter_map(|entry| entry.seconds.filter(|secs| secs.is_finite()))
            .enumerate()
            .map(|(idx, seconds)| ChartPoint {
                label: format!("Question {}", idx + 1),
                seconds,
            })
            .collect();

        let answers = result
            .answers
            .iter()
            .enumerate()
            .map(|(idx, (question_id, answer))| AnswerRow {
                label: format!("Question {}", idx + 1),
                answer: answer.clone(),
                time_label: result
                    .seconds_for(question_id)
                    .map_or_else(|| "N/A".to_string(), |secs| format!("{secs:.1}")),
            })
            .collect();

        Self {
            score_label: format!("{:.1}%", result.score),
            completed_at: result.completed_at(),
            completed_at_raw: result.completed_at.clone(),
            chart,
            answers,
        }
    }

    #[must_use]
    pub fn has_chart(&self) -> bool {
        !self.chart.is_empty()
    }

    #[must_use]
    pub fn max_seconds(&self) -> f64 {
        self.chart
            .iter()
            .map(|point| point.seconds)
            .fold(0.0, f64::max)
    }
}
