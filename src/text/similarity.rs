// Keyword-set Jaccard similarity between two texts.
//
// Each text contributes its top ten keywords as an unordered set. When both
// sets are empty the ratio is 0/0; EmptyKeywordPolicy decides the outcome.

use std::collections::HashSet;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::keywords::keywords;

/// Keywords per text used for pairwise comparison.
pub const SIMILARITY_KEYWORD_COUNT: usize = 10;

/// What to do when both compared texts have no extractable keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmptyKeywordPolicy {
    /// Nothing to disagree about: similarity 1.0.
    #[default]
    Identical,
    /// Nothing shared: similarity 0.0.
    Disjoint,
    /// Refuse to score the pair.
    Reject,
}

impl EmptyKeywordPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmptyKeywordPolicy::Identical => "identical",
            EmptyKeywordPolicy::Disjoint => "disjoint",
            EmptyKeywordPolicy::Reject => "reject",
        }
    }
}

impl FromStr for EmptyKeywordPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "identical" => Ok(EmptyKeywordPolicy::Identical),
            "disjoint" => Ok(EmptyKeywordPolicy::Disjoint),
            "reject" => Ok(EmptyKeywordPolicy::Reject),
            other => anyhow::bail!(
                "Unknown empty-keyword policy '{other}' (expected identical, disjoint, or reject)"
            ),
        }
    }
}

impl std::fmt::Display for EmptyKeywordPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Top keywords of `text` as a set, ready for Jaccard comparison.
pub fn keyword_set(text: &str) -> HashSet<String> {
    keywords(text, SIMILARITY_KEYWORD_COUNT).into_iter().collect()
}

/// Jaccard similarity of two keyword sets.
///
/// Returns `None` when both sets are empty, leaving the policy decision to
/// the caller.
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> Option<f64> {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        None
    } else {
        Some(intersection as f64 / union as f64)
    }
}

/// Keyword similarity between two texts, using `policy` for the empty case.
///
/// Returns `None` only when both texts lack keywords and the policy is
/// [`EmptyKeywordPolicy::Reject`].
pub fn similarity_with(text_a: &str, text_b: &str, policy: EmptyKeywordPolicy) -> Option<f64> {
    resolve(jaccard(&keyword_set(text_a), &keyword_set(text_b)), policy)
}

/// Keyword similarity between two texts with the default policy.
pub fn similarity(text_a: &str, text_b: &str) -> f64 {
    similarity_with(text_a, text_b, EmptyKeywordPolicy::Identical).unwrap_or(1.0)
}

/// Apply the empty-set policy to a raw Jaccard outcome.
pub fn resolve(raw: Option<f64>, policy: EmptyKeywordPolicy) -> Option<f64> {
    match (raw, policy) {
        (Some(score), _) => Some(score),
        (None, EmptyKeywordPolicy::Identical) => Some(1.0),
        (None, EmptyKeywordPolicy::Disjoint) => Some(0.0),
        (None, EmptyKeywordPolicy::Reject) => None,
    }
}
