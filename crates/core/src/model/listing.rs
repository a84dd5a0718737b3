use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Which data shape the home listing renders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListingMode {
    /// Every quiz the backend knows about.
    #[default]
    Flat,
    /// Textbooks, then the chapters of the selected textbook.
    Hierarchical,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown listing mode: {0} (expected `flat` or `textbooks`)")]
pub struct ListingModeError(pub String);

impl FromStr for ListingMode {
    type Err = ListingModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "flat" | "quizzes" => Ok(Self::Flat),
            "textbooks" | "hierarchical" | "chapters" => Ok(Self::Hierarchical),
            other => Err(ListingModeError(other.to_string())),
        }
    }
}

impl fmt::Display for ListingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Hierarchical => f.write_str("textbooks"),
        }
    }
}
