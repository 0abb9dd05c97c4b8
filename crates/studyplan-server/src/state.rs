//! Shared application state.

use studyplan_core::{QuestionBank, Result, StudyPlanConfig};
use studyplan_text::{LanguageResources, StopWords};
use tracing::info;

/// Read-only state shared by all route handlers.
pub struct AppState {
    pub config: StudyPlanConfig,
    pub question_bank: QuestionBank,
    pub resources: LanguageResources,
}

impl AppState {
    pub fn new(
        config: StudyPlanConfig,
        question_bank: QuestionBank,
        resources: LanguageResources,
    ) -> Self {
        Self {
            config,
            question_bank,
            resources,
        }
    }

    /// Acquire everything the handlers need: stop words and the question bank.
    ///
    /// Any failure here is meant to abort startup.
    pub fn initialize(config: StudyPlanConfig) -> Result<Self> {
        let resources = LanguageResources::bootstrap(&config.resource_dir, &config.language)?;
        info!(
            "Stop words: {} ({} entries)",
            resources.stopwords_path.display(),
            resources.stopwords.len()
        );

        let question_bank = match &config.question_bank_file {
            Some(path) => QuestionBank::from_json_file(path)?,
            None => QuestionBank::builtin(),
        };
        info!(
            "Question bank: {} questions across {:?}",
            question_bank.len(),
            question_bank.subjects()
        );

        Ok(Self::new(config, question_bank, resources))
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.resources.stopwords
    }
}
