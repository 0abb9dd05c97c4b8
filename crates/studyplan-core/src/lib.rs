//! StudyPlan Core — shared data model, question bank, configuration, errors.

pub mod config;
pub mod error;
pub mod models;
pub mod question_bank;

pub use config::StudyPlanConfig;
pub use error::{Error, Result};
pub use models::{Difficulty, Question, ScheduleSession};
pub use question_bank::{QuestionBank, SubjectQuestions};
