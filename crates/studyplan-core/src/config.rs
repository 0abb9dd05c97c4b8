//! Configuration from environment and defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{Error, Result};

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_RESOURCE_DIR: &str = "lang_data";
pub const DEFAULT_LANGUAGE: &str = "english";
pub const DEFAULT_QUIZ_COUNT: usize = 5;

/// Top-level StudyPlan configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudyPlanConfig {
    /// HTTP server port.
    pub port: u16,
    /// Interface the server binds to.
    pub host: String,
    /// Directory holding language resources (`{dir}/stopwords/{language}`).
    pub resource_dir: PathBuf,
    /// Stop-word language.
    pub language: String,
    /// Optional JSON question bank replacing the built-in table.
    pub question_bank_file: Option<PathBuf>,
    /// Number of questions per generated quiz.
    pub quiz_count: usize,
}

impl Default for StudyPlanConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            resource_dir: PathBuf::from(DEFAULT_RESOURCE_DIR),
            language: DEFAULT_LANGUAGE.to_string(),
            question_bank_file: None,
            quiz_count: DEFAULT_QUIZ_COUNT,
        }
    }
}

impl StudyPlanConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(defaults.port);
        let host = lookup("STUDYPLAN_HOST")
            .filter(|h| !h.trim().is_empty())
            .unwrap_or(defaults.host);
        let resource_dir = lookup("STUDYPLAN_RESOURCE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.resource_dir);
        let language = lookup("STUDYPLAN_LANGUAGE")
            .map(|l| l.trim().to_lowercase())
            .unwrap_or(defaults.language);
        let question_bank_file = lookup("STUDYPLAN_QUESTION_BANK")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);
        let quiz_count = lookup("STUDYPLAN_QUIZ_COUNT")
            .and_then(|c| c.trim().parse().ok())
            .unwrap_or(defaults.quiz_count);

        let config = Self {
            port,
            host,
            resource_dir,
            language,
            question_bank_file,
            quiz_count,
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.language.is_empty() {
            return Err(Error::Config("STUDYPLAN_LANGUAGE must not be empty".into()));
        }
        if self.quiz_count == 0 {
            return Err(Error::Config("STUDYPLAN_QUIZ_COUNT must be at least 1".into()));
        }
        Ok(())
    }

    /// `host:port` string for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
