//! Frequency-based extractive summarizer.
//!
//! Sentences are scored by the summed frequency of their words across the
//! whole text; the best ones are returned verbatim in document order.

use tracing::debug;

use crate::frequency::WordFrequencyTable;
use crate::resources::StopWords;
use crate::tokenize::{alphabetic_words, split_sentences};

pub const DEFAULT_MAX_SENTENCES: usize = 2;

/// Texts shorter than this (after trimming, in characters) are returned as-is.
pub const MIN_SUMMARY_CHARS: usize = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
struct SentenceScore<'a> {
    index: usize,
    sentence: &'a str,
    score: usize,
}

/// Summarize `text` into at most `max_sentences` of its own sentences.
pub fn summarize(text: &str, max_sentences: usize, stopwords: &StopWords) -> String {
    if text.trim().chars().count() < MIN_SUMMARY_CHARS {
        return text.to_string();
    }

    let freq = WordFrequencyTable::build(text, stopwords);
    let mut scored: Vec<SentenceScore> = split_sentences(text)
        .into_iter()
        .enumerate()
        .map(|(index, sentence)| SentenceScore {
            index,
            sentence,
            score: score_sentence(sentence, &freq),
        })
        .collect();
    let total = scored.len();

    // sort_by is stable: equal scores keep document order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(max_sentences);
    scored.sort_by_key(|s| s.index);

    debug!("Summary kept {} of {} sentences", scored.len(), total);

    scored
        .iter()
        .map(|s| s.sentence)
        .collect::<Vec<_>>()
        .join(" ")
}

fn score_sentence(sentence: &str, freq: &WordFrequencyTable) -> usize {
    alphabetic_words(sentence).iter().map(|w| freq.count(w)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stops() -> StopWords {
        StopWords::english()
    }

    #[test]
    fn test_short_text_returned_verbatim() {
        let text = "  Too short to summarize.  ";
        assert_eq!(summarize(text, 2, &stops()), text);
        assert_eq!(summarize("", 2, &stops()), "");
    }

    #[test]
    fn test_short_text_is_idempotent() {
        let text = "Just a note.";
        let once = summarize(text, 2, &stops());
        assert_eq!(summarize(&once, 2, &stops()), once);
    }

    #[test]
    fn test_top_sentences_in_document_order() {
        let text = "Rust ownership prevents data races. \
                    The weather was pleasant today. \
                    Rust ownership and borrowing make Rust memory safe.";
        let summary = summarize(text, 2, &stops());
        assert_eq!(
            summary,
            "Rust ownership prevents data races. \
             Rust ownership and borrowing make Rust memory safe."
        );
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let text = "Alpha beta gamma. Delta epsilon zeta. Eta theta iota.";
        assert_eq!(
            summarize(text, 2, &stops()),
            "Alpha beta gamma. Delta epsilon zeta."
        );
    }

    #[test]
    fn test_repeated_sentence_keeps_its_own_position() {
        let text = "Graphs store nodes. Cats nap. Graphs store nodes.";
        assert_eq!(summarize(text, 3, &stops()), text);
    }

    #[test]
    fn test_hyphenated_words_do_not_score() {
        let text = "A state-of-the-art, well-known, top-notch, high-end setup. \
                    Caching cuts latency. \
                    Caching helps.";
        assert_eq!(
            summarize(text, 1, &stops()),
            "Caching cuts latency."
        );
    }

    #[test]
    fn test_max_sentences_larger_than_text() {
        let text = "Only one sentence lives in this particular note";
        assert_eq!(summarize(text, 5, &stops()), text);
    }

    #[test]
    fn test_summary_sentences_come_from_input() {
        let text = "Queues are FIFO structures. Stacks are LIFO structures. \
                    Trees branch. Graphs connect nodes and edges in structures.";
        let summary = summarize(text, 2, &stops());
        for sentence in split_sentences(&summary) {
            assert!(text.contains(sentence));
        }
        assert_eq!(split_sentences(&summary).len(), 2);
    }
}
