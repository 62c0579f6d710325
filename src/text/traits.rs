// Lexicon provider trait: swap-ready abstraction for word lists.
//
// The sentiment and formality extractors only ask "is this token positive /
// negative / formal / casual?". Anything that can answer those questions can
// stand in for the built-in word lists, including a future model-backed
// classifier, without touching the aggregation logic.

/// Supplies the four indicator word sets used by the extractors.
///
/// Tokens passed in are already lowercased by the tokenizer.
pub trait LexiconProvider: Send + Sync {
    fn is_positive(&self, token: &str) -> bool;
    fn is_negative(&self, token: &str) -> bool;
    fn is_formal(&self, token: &str) -> bool;
    fn is_casual(&self, token: &str) -> bool;
}
