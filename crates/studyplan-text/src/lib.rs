//! StudyPlan Text — tokenization, stop words, extractive summaries, review keywords.

pub mod frequency;
pub mod keywords;
pub mod resources;
pub mod summarize;
pub mod tokenize;

pub use frequency::WordFrequencyTable;
pub use keywords::{extract_keywords, extract_tips, review_tip, DEFAULT_TOP_K};
pub use resources::{LanguageResources, StopWords};
pub use summarize::{summarize, DEFAULT_MAX_SENTENCES, MIN_SUMMARY_CHARS};
