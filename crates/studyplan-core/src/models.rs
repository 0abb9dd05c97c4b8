//! Shared data types.

use serde::{Deserialize, Serialize};

/// Quiz question difficulty tag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Question {
    pub text: String,
    pub options: [String; 4],
    pub correct_answer: String,
    pub difficulty: Difficulty,
}

impl Question {
    pub fn new(
        text: &str,
        options: [&str; 4],
        correct_answer: &str,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            text: text.to_string(),
            options: options.map(str::to_string),
            correct_answer: correct_answer.to_string(),
            difficulty,
        }
    }
}

/// One day of a generated study schedule.
///
/// Serialized as `day,hours,focus` so the CSV header matches the download format.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSession {
    #[serde(rename = "day")]
    pub day_label: String,
    pub hours: i64,
    pub focus: String,
}
