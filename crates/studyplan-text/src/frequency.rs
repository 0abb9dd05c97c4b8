//! Word frequency counting with first-seen ordering.

use std::collections::HashMap;

use crate::resources::StopWords;
use crate::tokenize::alphabetic_words;

/// Counts of lowercase alphabetic non-stop-words in one text.
///
/// Entries keep the order in which each word was first seen, so ranking
/// with a stable sort breaks ties in favour of earlier words.
#[derive(Debug, Clone, Default)]
pub struct WordFrequencyTable {
    index: HashMap<String, usize>,
    entries: Vec<(String, usize)>,
}

impl WordFrequencyTable {
    pub fn build(text: &str, stopwords: &StopWords) -> Self {
        let mut table = Self::default();
        for word in alphabetic_words(text) {
            if stopwords.contains(&word) {
                continue;
            }
            match table.index.get(&word) {
                Some(&i) => table.entries[i].1 += 1,
                None => {
                    table.index.insert(word.clone(), table.entries.len());
                    table.entries.push((word, 1));
                }
            }
        }
        table
    }

    /// Count for a word; zero when absent (including stop words).
    pub fn count(&self, word: &str) -> usize {
        self.index.get(word).map(|&i| self.entries[i].1).unwrap_or(0)
    }

    /// The `n` most frequent words, ties kept in first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .entries
            .iter()
            .map(|(w, c)| (w.as_str(), *c))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
