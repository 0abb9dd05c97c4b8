//! Sentence and word tokenization.

use once_cell::sync::Lazy;
use regex::Regex;

/// Words, keeping inner hyphens and apostrophes (`well-known`, `o'clock`).
static WORD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+(?:[-']\w+)*").expect("valid word regex"));

/// Trailing contractions split off as their own token (`don't` -> `do`, `n't`).
const CLITICS: &[&str] = &["n't", "'s", "'ll", "'re", "'ve", "'d", "'m"];

fn is_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

fn is_closer(c: char) -> bool {
    matches!(c, '"' | '\'' | ')' | ']' | '}' | '\u{201D}' | '\u{2019}')
}

/// Split text into trimmed sentences.
///
/// A sentence ends at a run of `.`, `!` or `?`, plus any closing quotes or
/// brackets right after it, when whitespace follows. Whatever is left after
/// the last boundary is the final sentence.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        if !is_terminator(c) {
            continue;
        }
        let mut end = i + c.len_utf8();
        while let Some(&(j, next)) = chars.peek() {
            if !(is_terminator(next) || is_closer(next)) {
                break;
            }
            end = j + next.len_utf8();
            chars.next();
        }
        if matches!(chars.peek(), Some(&(_, next)) if next.is_whitespace()) {
            let s = text[start..end].trim();
            if !s.is_empty() {
                sentences.push(s);
            }
            start = end;
        }
    }

    let s = text[start..].trim();
    if !s.is_empty() {
        sentences.push(s);
    }
    sentences
}

fn split_clitic(token: &str) -> (&str, Option<&str>) {
    for clitic in CLITICS {
        if token.len() <= clitic.len() {
            continue;
        }
        let cut = token.len() - clitic.len();
        if token.is_char_boundary(cut) && token[cut..].eq_ignore_ascii_case(clitic) {
            return (&token[..cut], Some(&token[cut..]));
        }
    }
    (token, None)
}

/// Word tokens in order of appearance.
///
/// Hyphenated and apostrophe words stay whole unless they end in a
/// contraction, which becomes a separate token.
pub fn word_tokens(text: &str) -> Vec<&str> {
    let mut tokens = Vec::new();
    for m in WORD_RE.find_iter(text) {
        let (head, clitic) = split_clitic(m.as_str());
        tokens.push(head);
        tokens.extend(clitic);
    }
    tokens
}

/// True when every character of the token is alphabetic.
pub fn is_alphabetic(token: &str) -> bool {
    !token.is_empty() && token.chars().all(char::is_alphabetic)
}

/// Lowercased alphabetic tokens of `text`, in order of appearance.
pub fn alphabetic_words(text: &str) -> Vec<String> {
    word_tokens(text)
        .into_iter()
        .filter(|t| is_alphabetic(t))
        .map(str::to_lowercase)
        .collect()
}
