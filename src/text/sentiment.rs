// Lexicon sentiment score.
//
// Counts positive and negative indicator words and dampens the sum by text
// length. Short texts (under ten tokens) are not dampened at all, so a short
// text dense with sentiment words can land outside [-1, 1]. The score is
// deliberately left unclamped.

use super::lexicon;
use super::tokenize::tokenize;
use super::traits::LexiconProvider;

/// Sentiment of `text` using the built-in word lists.
pub fn sentiment(text: &str) -> f64 {
    sentiment_with(lexicon::built_in(), text)
}

/// Sentiment of `text` using a caller-supplied lexicon.
pub fn sentiment_with(lexicon: &dyn LexiconProvider, text: &str) -> f64 {
    let tokens = tokenize(text);

    let mut raw = 0.0;
    for token in &tokens {
        if lexicon.is_positive(token) {
            raw += 1.0;
        }
        if lexicon.is_negative(token) {
            raw -= 1.0;
        }
    }

    raw / (tokens.len() as f64 / 10.0).max(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_text() {
        let score = sentiment("I love this amazing product");
        assert!((score - 2.0).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn test_negative_text() {
        let score = sentiment("This is terrible and awful");
        assert!((score + 2.0).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn test_neutral_text() {
        assert_eq!(sentiment("The sky is blue today"), 0.0);
    }

    #[test]
    fn test_empty_text_is_zero() {
        assert_eq!(sentiment(""), 0.0);
    }

    #[test]
    fn test_long_text_is_dampened() {
        // 20 tokens, one positive word: 1 / (20 / 10) = 0.5
        let text = "good one two three four five six seven eight nine \
                    ten eleven twelve thirteen fourteen fifteen sixteen seventeen eighteen nineteen";
        let score = sentiment(text);
        assert!((score - 0.5).abs() < 1e-12, "got {score}");
    }

    #[test]
    fn test_short_dense_text_is_not_clamped() {
        let score = sentiment("great great great");
        assert!((score - 3.0).abs() < f64::EPSILON, "got {score}");
    }

    #[test]
    fn test_trailing_punctuation_counts_as_token() {
        // "good!" tokenizes to ["good", ""], still under ten tokens
        assert_eq!(sentiment("good!"), 1.0);
    }
}
