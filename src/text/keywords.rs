// Frequency-ranked keyword extraction.
//
// Tokens of three characters or fewer are dropped, the rest are counted, and
// distinct tokens are ranked by descending frequency. Ties keep first-seen
// order: counts are accumulated in a Vec in insertion order and ranked with
// a stable sort, so the ranking is reproducible for identical input.

use std::collections::HashMap;

use super::tokenize::tokenize;

/// Keywords kept per item in the platform summary.
pub const DEFAULT_KEYWORD_COUNT: usize = 5;

/// Tokens must be longer than this to count as keywords.
const MIN_KEYWORD_EXCLUSIVE_LEN: usize = 3;

/// Extract up to `count` keywords from `text`, most frequent first.
pub fn keywords(text: &str, count: usize) -> Vec<String> {
    let mut counts: Vec<(String, u32)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for token in tokenize(text) {
        if token.len() <= MIN_KEYWORD_EXCLUSIVE_LEN {
            continue;
        }
        match index.get(&token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    // sort_by is stable: equal counts stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(count)
        .map(|(word, _)| word)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_has_no_keywords() {
        assert!(keywords("", DEFAULT_KEYWORD_COUNT).is_empty());
    }

    #[test]
    fn test_short_tokens_dropped() {
        assert!(keywords("a an the and for you", 5).is_empty());
        assert_eq!(keywords("the best deal", 5), vec!["best", "deal"]);
    }

    #[test]
    fn test_ranked_by_frequency() {
        let kws = keywords("coffee beans roast coffee beans coffee", 5);
        assert_eq!(kws, vec!["coffee", "beans", "roast"]);
    }

    #[test]
    fn test_ties_keep_first_occurrence_order() {
        let kws = keywords("zebra apple mango apple zebra mango kiwis", 5);
        assert_eq!(kws, vec!["zebra", "apple", "mango", "kiwis"]);
    }

    #[test]
    fn test_respects_count() {
        let kws = keywords("alpha bravo charlie delta echoes foxtrot golfing hotel", 3);
        assert_eq!(kws, vec!["alpha", "bravo", "charlie"]);
    }

    #[test]
    fn test_count_zero_is_empty() {
        assert!(keywords("plenty of words here", 0).is_empty());
    }
}
