// Text metrics: tokenization, lexicon lookups, and per-text extractors.

pub mod traits;
pub mod lexicon;
pub mod tokenize;
pub mod sentiment;
pub mod formality;
pub mod keywords;
pub mod similarity;
