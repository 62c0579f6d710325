// Formality score from formal/casual indicator words.

use super::lexicon;
use super::tokenize::tokenize;
use super::traits::LexiconProvider;

/// Score returned when a text contains no indicator words at all.
pub const NEUTRAL_FORMALITY: f64 = 0.5;

/// Formality of `text` (0.0 casual, 1.0 formal) using the built-in word lists.
pub fn formality(text: &str) -> f64 {
    formality_with(lexicon::built_in(), text)
}

/// Formality of `text` using a caller-supplied lexicon.
///
/// Returns the share of indicator hits that are formal, or exactly
/// [`NEUTRAL_FORMALITY`] when there are no hits.
pub fn formality_with(lexicon: &dyn LexiconProvider, text: &str) -> f64 {
    let mut formal = 0u32;
    let mut casual = 0u32;

    for token in tokenize(text) {
        if lexicon.is_formal(&token) {
            formal += 1;
        }
        if lexicon.is_casual(&token) {
            casual += 1;
        }
    }

    let total = formal + casual;
    if total == 0 {
        NEUTRAL_FORMALITY
    } else {
        formal as f64 / total as f64
    }
}
