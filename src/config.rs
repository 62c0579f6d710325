use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::text::lexicon::WordListLexicon;
use crate::text::similarity::EmptyKeywordPolicy;

/// Minimum trimmed content length accepted by submission validation.
pub const DEFAULT_MIN_CONTENT_CHARS: usize = 20;

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded automatically at startup via dotenvy.
#[derive(Debug, Clone)]
pub struct Config {
    /// Optional JSON lexicon overriding the built-in word lists (VOICEGRADE_LEXICON)
    pub lexicon_path: Option<PathBuf>,
    /// Minimum content length for submission validation (VOICEGRADE_MIN_CONTENT_CHARS)
    pub min_content_chars: usize,
    /// How to score a pair of texts that both lack keywords (VOICEGRADE_EMPTY_KEYWORDS)
    pub empty_keyword_policy: EmptyKeywordPolicy,
    /// Where markdown reports go when no explicit path is given (VOICEGRADE_REPORT_DIR)
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lexicon_path: None,
            min_content_chars: DEFAULT_MIN_CONTENT_CHARS,
            empty_keyword_policy: EmptyKeywordPolicy::default(),
            report_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; only malformed values are errors.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup. `load` passes the
    /// process environment; tests pass a map.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let min_content_chars = match lookup("VOICEGRADE_MIN_CONTENT_CHARS") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("VOICEGRADE_MIN_CONTENT_CHARS must be a non-negative integer, got '{raw}'")
            })?,
            None => defaults.min_content_chars,
        };

        let empty_keyword_policy = match lookup("VOICEGRADE_EMPTY_KEYWORDS") {
            Some(raw) => raw
                .parse::<EmptyKeywordPolicy>()
                .context("Invalid VOICEGRADE_EMPTY_KEYWORDS")?,
            None => defaults.empty_keyword_policy,
        };

        Ok(Self {
            lexicon_path: lookup("VOICEGRADE_LEXICON")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            min_content_chars,
            empty_keyword_policy,
            report_dir: lookup("VOICEGRADE_REPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.report_dir),
        })
    }

    /// Build the active lexicon: the custom file if configured, otherwise
    /// the built-in lists.
    pub fn lexicon(&self) -> Result<WordListLexicon> {
        match &self.lexicon_path {
            Some(path) => WordListLexicon::load(path),
            None => Ok(WordListLexicon::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.min_content_chars, 20);
        assert_eq!(config.empty_keyword_policy, EmptyKeywordPolicy::Identical);
        assert!(config.lexicon_path.is_none());
        assert_eq!(config.report_dir, PathBuf::from("."));
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("VOICEGRADE_MIN_CONTENT_CHARS", "5"),
            ("VOICEGRADE_EMPTY_KEYWORDS", "reject"),
            ("VOICEGRADE_LEXICON", "/tmp/lexicon.json"),
            ("VOICEGRADE_REPORT_DIR", "/tmp/reports"),
        ]))
        .unwrap();
        assert_eq!(config.min_content_chars, 5);
        assert_eq!(config.empty_keyword_policy, EmptyKeywordPolicy::Reject);
        assert_eq!(config.lexicon_path, Some(PathBuf::from("/tmp/lexicon.json")));
        assert_eq!(config.report_dir, PathBuf::from("/tmp/reports"));
    }

    #[test]
    fn test_bad_min_chars_is_error() {
        let result = Config::from_lookup(lookup_from(&[("VOICEGRADE_MIN_CONTENT_CHARS", "lots")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_bad_policy_is_error() {
        let result = Config::from_lookup(lookup_from(&[("VOICEGRADE_EMPTY_KEYWORDS", "maybe")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_lexicon_without_path() {
        let config = Config::default();
        assert_eq!(config.lexicon().unwrap(), WordListLexicon::default());
    }
}
