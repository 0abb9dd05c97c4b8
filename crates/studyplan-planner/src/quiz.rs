//! Deterministic quiz selection from the question bank.

use studyplan_core::{Question, QuestionBank};
use tracing::debug;

/// Pick up to `count` questions for `subject`.
///
/// An optional difficulty filter must equal the lowercase tag exactly. When
/// the subject is unknown or the filter leaves nothing, the whole bank (in
/// declaration order, unfiltered) is used instead. The pool is never padded.
pub fn select_quiz(
    bank: &QuestionBank,
    subject: &str,
    count: usize,
    difficulty: Option<&str>,
) -> Vec<Question> {
    let pool: Vec<&Question> = bank
        .get(subject)
        .unwrap_or_default()
        .iter()
        .filter(|q| difficulty.map_or(true, |d| q.difficulty.as_str() == d))
        .collect();

    let pool = if pool.is_empty() {
        debug!(
            "No questions for subject={:?} difficulty={:?}, using full bank",
            subject, difficulty
        );
        bank.all().collect()
    } else {
        pool
    };

    pool.into_iter().take(count).cloned().collect()
}
