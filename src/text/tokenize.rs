// Word tokenizer shared by every extractor.
//
// Text is lowercased first, then split on runs of non-word characters
// (anything outside [A-Za-z0-9_]). Empty segments from the split are kept:
// an empty string becomes `[""]` and trailing punctuation leaves a trailing
// empty token. Sentiment normalization divides by the raw token count, so
// dropping those segments would change scores.

use std::sync::LazyLock;

use regex_lite::Regex;

static NON_WORD_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\W+").expect("static non-word pattern is valid"));

/// Split text into lowercase word tokens, keeping empty split segments.
pub fn tokenize(text: &str) -> Vec<String> {
    let lower = text.to_lowercase();
    NON_WORD_RUN.split(&lower).map(str::to_string).collect()
}
