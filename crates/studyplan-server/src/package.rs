//! Assembles everything the results page shows for one request.

use serde::Serialize;
use studyplan_core::{Question, ScheduleSession};
use studyplan_planner::{generate_study_plan, select_quiz};
use studyplan_text::{extract_tips, summarize, DEFAULT_MAX_SENTENCES, DEFAULT_TOP_K};

use crate::state::AppState;

/// Schedule, quiz, summary and tips for one subject.
#[derive(Debug, Clone, Serialize)]
pub struct StudyPackage {
    pub subject: String,
    pub hours: i64,
    pub plan: Vec<ScheduleSession>,
    pub quiz: Vec<Question>,
    pub summary: String,
    pub keywords: Vec<String>,
    pub tips: Vec<String>,
}

fn placeholder_description(subject: &str) -> String {
    format!(
        "This is a placeholder description about {}. Add your notes here to summarize.",
        subject
    )
}

fn placeholder_topics(subject: &str) -> String {
    format!("{} important topics: basics, practice, examples.", subject)
}

/// Build the package. Empty notes are replaced by subject placeholders and an
/// empty difficulty means no filter.
pub fn build_study_package(
    state: &AppState,
    subject: &str,
    hours: i64,
    sample_text: &str,
    difficulty: &str,
) -> StudyPackage {
    let stopwords = state.stopwords();
    let difficulty = Some(difficulty).filter(|d| !d.is_empty());

    let plan = generate_study_plan(subject, hours);
    let quiz = select_quiz(&state.question_bank, subject, state.config.quiz_count, difficulty);

    let summary = if sample_text.is_empty() {
        summarize(&placeholder_description(subject), DEFAULT_MAX_SENTENCES, stopwords)
    } else {
        summarize(sample_text, DEFAULT_MAX_SENTENCES, stopwords)
    };
    let (keywords, tips) = if sample_text.is_empty() {
        extract_tips(&placeholder_topics(subject), DEFAULT_TOP_K, stopwords)
    } else {
        extract_tips(sample_text, DEFAULT_TOP_K, stopwords)
    };

    StudyPackage {
        subject: subject.to_string(),
        hours,
        plan,
        quiz,
        summary,
        keywords,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use studyplan_core::{QuestionBank, StudyPlanConfig};
    use studyplan_text::{LanguageResources, StopWords};

    fn test_state() -> AppState {
        let resources = LanguageResources {
            language: "english".into(),
            stopwords_path: "unused".into(),
            stopwords: StopWords::english(),
        };
        AppState::new(StudyPlanConfig::default(), QuestionBank::builtin(), resources)
    }

    #[test]
    fn test_cs_five_hours() {
        let state = test_state();
        let package = build_study_package(&state, "cs", 5, "", "");
        assert_eq!(package.plan.len(), 5);
        assert!(package.plan.iter().all(|s| s.hours == 1));
        assert_eq!(package.quiz.len(), 2);
        assert_eq!(package.quiz[0].text, "Which data structure uses FIFO?");
    }

    #[test]
    fn test_placeholders_when_notes_empty() {
        let state = test_state();
        let package = build_study_package(&state, "Chemistry", 3, "", "");
        assert_eq!(
            package.summary,
            "This is a placeholder description about Chemistry. Add your notes here to summarize."
        );
        assert_eq!(
            package.keywords,
            vec!["chemistry", "important", "topics", "basics", "practice"]
        );
        assert_eq!(package.tips.len(), 5);
    }

    #[test]
    fn test_difficulty_filter_applied() {
        let state = test_state();
        let package = build_study_package(&state, "math", 3, "", "medium");
        assert_eq!(package.quiz.len(), 2);
        assert_eq!(package.quiz[0].text, "What is derivative of x^2?");
    }

    #[test]
    fn test_notes_drive_summary_and_tips() {
        let state = test_state();
        let notes = "Photosynthesis converts light into chemical energy. \
                     Lunch was fine. \
                     Chlorophyll absorbs light during photosynthesis.";
        let package = build_study_package(&state, "biology", 4, notes, "");
        assert_eq!(
            package.summary,
            "Photosynthesis converts light into chemical energy. \
             Chlorophyll absorbs light during photosynthesis."
        );
        assert_eq!(package.keywords[0], "photosynthesis");
        assert_eq!(package.keywords[1], "light");
    }
}
