//! Error types for StudyPlan.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid hours value: {0:?}")]
    InvalidHours(String),

    #[error("Language resource error: {0}")]
    Resource(String),

    #[error("Question bank error: {0}")]
    QuestionBank(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
