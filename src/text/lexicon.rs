// Word-list lexicon: the default LexiconProvider.
//
// Ships with the fixed sentiment and formality indicator lists. A custom
// lexicon can be loaded from JSON; any list missing from the file keeps its
// built-in default.

use std::collections::BTreeSet;
use std::path::Path;
use std::sync::LazyLock;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::traits::LexiconProvider;

pub const POSITIVE_WORDS: [&str; 8] = [
    "happy", "great", "excellent", "good", "amazing", "love", "best", "positive",
];

pub const NEGATIVE_WORDS: [&str; 8] = [
    "bad",
    "terrible",
    "awful",
    "worst",
    "hate",
    "poor",
    "negative",
    "disappointing",
];

pub const FORMAL_WORDS: [&str; 10] = [
    "therefore",
    "consequently",
    "furthermore",
    "additionally",
    "however",
    "nevertheless",
    "regarding",
    "concerning",
    "accordingly",
    "subsequently",
];

pub const CASUAL_WORDS: [&str; 12] = [
    "yeah", "cool", "awesome", "gonna", "wanna", "kinda", "sorta", "just", "really", "super",
    "totally", "basically",
];

static BUILT_IN: LazyLock<WordListLexicon> = LazyLock::new(WordListLexicon::default);

/// The built-in word lists, shared by the convenience extractors.
pub fn built_in() -> &'static WordListLexicon {
    &BUILT_IN
}

/// Four indicator word sets. Words are stored lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WordListLexicon {
    pub positive: BTreeSet<String>,
    pub negative: BTreeSet<String>,
    pub formal: BTreeSet<String>,
    pub casual: BTreeSet<String>,
}

impl Default for WordListLexicon {
    fn default() -> Self {
        Self {
            positive: to_set(&POSITIVE_WORDS),
            negative: to_set(&NEGATIVE_WORDS),
            formal: to_set(&FORMAL_WORDS),
            casual: to_set(&CASUAL_WORDS),
        }
    }
}

impl WordListLexicon {
    /// Parse a lexicon from JSON. Entries are lowercased so they line up
    /// with tokenizer output.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: WordListLexicon =
            serde_json::from_str(json).context("Lexicon JSON is malformed")?;
        Ok(parsed.normalized())
    }

    /// Load a lexicon from a JSON file on disk.
    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read lexicon file {}", path.display()))?;
        let lexicon = Self::from_json(&json)
            .with_context(|| format!("Failed to parse lexicon file {}", path.display()))?;

        info!(
            path = %path.display(),
            positive = lexicon.positive.len(),
            negative = lexicon.negative.len(),
            formal = lexicon.formal.len(),
            casual = lexicon.casual.len(),
            "Loaded custom lexicon"
        );

        Ok(lexicon)
    }

    fn normalized(self) -> Self {
        let lower = |set: BTreeSet<String>| set.into_iter().map(|w| w.to_lowercase()).collect();
        Self {
            positive: lower(self.positive),
            negative: lower(self.negative),
            formal: lower(self.formal),
            casual: lower(self.casual),
        }
    }
}

impl LexiconProvider for WordListLexicon {
    fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    fn is_formal(&self, token: &str) -> bool {
        self.formal.contains(token)
    }

    fn is_casual(&self, token: &str) -> bool {
        self.casual.contains(token)
    }
}

fn to_set(words: &[&str]) -> BTreeSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}
