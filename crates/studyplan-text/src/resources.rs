//! Language resource bootstrap.
//!
//! Stop-word lists live on disk under `{resource_dir}/stopwords/{language}`,
//! one word per line. On first start the bundled list is written there so an
//! operator can edit it; afterwards the on-disk copy is authoritative.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use studyplan_core::{Error, Result};
use tracing::{debug, info};

/// Bundled English stop-word list.
pub const BUNDLED_ENGLISH: &str = include_str!("../resources/stopwords/english");

fn bundled_list(language: &str) -> Option<&'static str> {
    match language {
        "english" => Some(BUNDLED_ENGLISH),
        _ => None,
    }
}

/// An immutable stop-word set.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Parse a one-word-per-line list. Blank lines and `#` comments are skipped.
    pub fn parse(data: &str) -> Self {
        let words = data
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty() && !l.starts_with('#'))
            .map(str::to_lowercase)
            .collect();
        Self { words }
    }

    /// The bundled English list, without touching the filesystem.
    pub fn english() -> Self {
        Self::parse(BUNDLED_ENGLISH)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

/// Language data acquired once at startup.
#[derive(Debug, Clone)]
pub struct LanguageResources {
    pub language: String,
    pub stopwords_path: PathBuf,
    pub stopwords: StopWords,
}

impl LanguageResources {
    /// Ensure the stop-word list for `language` exists under `dir`, then load it.
    pub fn bootstrap(dir: &Path, language: &str) -> Result<Self> {
        let path = dir.join("stopwords").join(language);

        if !path.exists() {
            let bundled = bundled_list(language).ok_or_else(|| {
                Error::Resource(format!(
                    "no stop-word list for '{}' at {} and none bundled",
                    language,
                    path.display()
                ))
            })?;
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    Error::Resource(format!("cannot create {}: {}", parent.display(), e))
                })?;
            }
            std::fs::write(&path, bundled).map_err(|e| {
                Error::Resource(format!("cannot write {}: {}", path.display(), e))
            })?;
            info!("Provisioned '{}' stop words at {}", language, path.display());
        }

        let data = std::fs::read_to_string(&path)
            .map_err(|e| Error::Resource(format!("cannot read {}: {}", path.display(), e)))?;
        let stopwords = StopWords::parse(&data);
        if stopwords.is_empty() {
            return Err(Error::Resource(format!(
                "stop-word list {} is empty",
                path.display()
            )));
        }
        debug!("Loaded {} stop words from {}", stopwords.len(), path.display());

        Ok(Self {
            language: language.to_string(),
            stopwords_path: path,
            stopwords,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_english() {
        let stops = StopWords::english();
        assert_eq!(stops.len(), 179);
        assert!(stops.contains("the"));
        assert!(stops.contains("don't"));
        assert!(!stops.contains("rust"));
    }

    #[test]
    fn test_parse_skips_comments_and_blanks() {
        let stops = StopWords::parse("# header\n\n The \nAND\n");
        assert_eq!(stops.len(), 2);
        assert!(stops.contains("the"));
        assert!(stops.contains("and"));
    }

    #[test]
    fn test_bootstrap_provisions_missing_list() {
        let dir = tempfile::tempdir().unwrap();
        let res = LanguageResources::bootstrap(dir.path(), "english").unwrap();
        assert!(res.stopwords_path.exists());
        assert_eq!(res.stopwords.len(), 179);
    }

    #[test]
    fn test_bootstrap_prefers_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let stop_dir = dir.path().join("stopwords");
        std::fs::create_dir_all(&stop_dir).unwrap();
        std::fs::write(stop_dir.join("english"), "foo\nbar\n").unwrap();

        let res = LanguageResources::bootstrap(dir.path(), "english").unwrap();
        assert_eq!(res.stopwords.len(), 2);
        assert!(res.stopwords.contains("foo"));
        assert!(!res.stopwords.contains("the"));
    }

    #[test]
    fn test_bootstrap_unknown_language_fails() {
        let dir = tempfile::tempdir().unwrap();
        let result = LanguageResources::bootstrap(dir.path(), "klingon");
        assert!(matches!(result, Err(Error::Resource(_))));
    }

    #[test]
    fn test_bootstrap_empty_list_fails() {
        let dir = tempfile::tempdir().unwrap();
        let stop_dir = dir.path().join("stopwords");
        std::fs::create_dir_all(&stop_dir).unwrap();
        std::fs::write(stop_dir.join("english"), "\n# nothing\n").unwrap();
        let result = LanguageResources::bootstrap(dir.path(), "english");
        assert!(matches!(result, Err(Error::Resource(_))));
    }
}
