//! Immutable question bank grouped by subject.
//!
//! The bank is built once at startup (built-in table or a JSON file) and
//! shared read-only afterwards. Subjects keep their declaration order, which
//! is the order used when a quiz falls back to the whole bank.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};
use crate::models::{Difficulty, Question};

/// Questions for one subject.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SubjectQuestions {
    pub subject: String,
    pub questions: Vec<Question>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionBank {
    subjects: Vec<SubjectQuestions>,
}

impl QuestionBank {
    /// Build a bank from subject groups. Subject keys are stored lowercase.
    pub fn new(subjects: Vec<SubjectQuestions>) -> Result<Self> {
        let mut normalized: Vec<SubjectQuestions> = Vec::with_capacity(subjects.len());
        for group in subjects {
            let key = group.subject.trim().to_lowercase();
            if key.is_empty() {
                return Err(Error::QuestionBank("subject name must not be empty".into()));
            }
            if normalized.iter().any(|g| g.subject == key) {
                return Err(Error::QuestionBank(format!("duplicate subject: {}", key)));
            }
            normalized.push(SubjectQuestions {
                subject: key,
                questions: group.questions,
            });
        }
        Ok(Self { subjects: normalized })
    }

    /// The default table shipped with the application.
    pub fn builtin() -> Self {
        use Difficulty::{Easy, Medium};

        Self {
            subjects: vec![
                SubjectQuestions {
                    subject: "math".into(),
                    questions: vec![
                        Question::new("What is 2+2?", ["3", "4", "5", "6"], "4", Easy),
                        Question::new(
                            "What is derivative of x^2?",
                            ["2x", "x", "x^2", "2"],
                            "2x",
                            Medium,
                        ),
                        Question::new(
                            "Integral of 1/x dx is?",
                            ["ln|x| + C", "x + C", "1/x + C", "e^x + C"],
                            "ln|x| + C",
                            Medium,
                        ),
                    ],
                },
                SubjectQuestions {
                    subject: "cs".into(),
                    questions: vec![
                        Question::new(
                            "Which data structure uses FIFO?",
                            ["Stack", "Queue", "Tree", "Graph"],
                            "Queue",
                            Easy,
                        ),
                        Question::new(
                            "What does HTTP stand for?",
                            [
                                "HyperText Transfer Protocol",
                                "Hyperlink Transfer Protocol",
                                "HighText Transfer Protocol",
                                "HyperText Translate Protocol",
                            ],
                            "HyperText Transfer Protocol",
                            Easy,
                        ),
                    ],
                },
                SubjectQuestions {
                    subject: "english".into(),
                    questions: vec![Question::new(
                        "Choose the correct past tense of 'go'.",
                        ["goed", "went", "gone", "goes"],
                        "went",
                        Easy,
                    )],
                },
            ],
        }
    }

    /// Load a bank from a JSON array of `{subject, questions}` objects.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| {
            Error::QuestionBank(format!("cannot read {}: {}", path.display(), e))
        })?;
        let subjects: Vec<SubjectQuestions> = serde_json::from_str(&data)?;
        let bank = Self::new(subjects)?;
        info!(
            "Loaded question bank from {} ({} subjects, {} questions)",
            path.display(),
            bank.subjects.len(),
            bank.len()
        );
        Ok(bank)
    }

    /// Questions for a subject, matched case-insensitively.
    pub fn get(&self, subject: &str) -> Option<&[Question]> {
        let key = subject.to_lowercase();
        self.subjects
            .iter()
            .find(|g| g.subject == key)
            .map(|g| g.questions.as_slice())
    }

    /// Every question of every subject, in declaration order.
    pub fn all(&self) -> impl Iterator<Item = &Question> {
        self.subjects.iter().flat_map(|g| g.questions.iter())
    }

    pub fn subjects(&self) -> Vec<&str> {
        self.subjects.iter().map(|g| g.subject.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.subjects.iter().map(|g| g.questions.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for QuestionBank {
    fn default() -> Self {
        Self::builtin()
    }
}
