//! Review keywords and study tips.

use crate::frequency::WordFrequencyTable;
use crate::resources::StopWords;

pub const DEFAULT_TOP_K: usize = 5;

/// The `topk` most frequent non-stop-words, ties in first-seen order.
pub fn extract_keywords(text: &str, topk: usize, stopwords: &StopWords) -> Vec<String> {
    WordFrequencyTable::build(text, stopwords)
        .most_common(topk)
        .into_iter()
        .map(|(word, _)| word.to_string())
        .collect()
}

pub fn review_tip(keyword: &str) -> String {
    format!("Review the keyword: '{}' daily for 10 minutes.", keyword)
}

/// Keywords and one tip per keyword, in the same order.
pub fn extract_tips(text: &str, topk: usize, stopwords: &StopWords) -> (Vec<String>, Vec<String>) {
    let keywords = extract_keywords(text, topk, stopwords);
    let tips = keywords.iter().map(|k| review_tip(k)).collect();
    (keywords, tips)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenize::alphabetic_words;
    use std::collections::HashSet;

    #[test]
    fn test_placeholder_text() {
        let (keywords, tips) = extract_tips(
            "cs important topics: basics, practice, examples.",
            5,
            &StopWords::english(),
        );
        assert_eq!(keywords, vec!["cs", "important", "topics", "basics", "practice"]);
        assert_eq!(tips[0], "Review the keyword: 'cs' daily for 10 minutes.");
        assert_eq!(tips.len(), keywords.len());
    }

    #[test]
    fn test_frequency_order() {
        let text = "Recursion needs a base case. Recursion without a base case never ends. \
                    Recursion is elegant.";
        let keywords = extract_keywords(text, 3, &StopWords::english());
        assert_eq!(keywords, vec!["recursion", "base", "case"]);
    }

    #[test]
    fn test_keywords_unique_bounded_and_from_vocabulary() {
        let stops = StopWords::english();
        let text = "The heap and the stack. The stack grows, the heap grows too. \
                    Memory memory memory!";
        let keywords = extract_keywords(text, 4, &stops);
        assert!(keywords.len() <= 4);

        let unique: HashSet<&String> = keywords.iter().collect();
        assert_eq!(unique.len(), keywords.len());

        let vocab: HashSet<String> = alphabetic_words(text)
            .into_iter()
            .filter(|w| !stops.contains(w))
            .collect();
        assert!(keywords.iter().all(|k| vocab.contains(k)));
        assert_eq!(keywords[0], "memory");
    }

    #[test]
    fn test_hyphenated_and_apostrophe_words_are_not_keywords() {
        let keywords = extract_keywords(
            "state-of-the-art well-known o'clock design",
            5,
            &StopWords::english(),
        );
        assert_eq!(keywords, vec!["design"]);
    }

    #[test]
    fn test_contraction_stems_count() {
        let keywords = extract_keywords(
            "Compilers couldn't optimize it. The compiler's output couldn't shrink.",
            3,
            &StopWords::english(),
        );
        assert_eq!(keywords, vec!["could", "compilers", "optimize"]);
    }

    #[test]
    fn test_fewer_words_than_topk() {
        let (keywords, tips) = extract_tips("the and of", 5, &StopWords::english());
        assert!(keywords.is_empty());
        assert!(tips.is_empty());
    }
}
