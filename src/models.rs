// Data models: the types that flow in and out of the scoring engine.
//
// JSON field names are camelCase so results can be handed straight to a
// rendering layer that zips `platformMetrics[i]` with the caller's i-th
// platform label.

use serde::{Deserialize, Serialize};

/// One piece of content from one distribution platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    /// Display label (e.g. "Twitter"). Not required to be unique.
    pub platform: String,
    /// Raw content body
    #[serde(alias = "content")]
    pub text: String,
}

impl ContentItem {
    pub fn new(platform: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            text: text.into(),
        }
    }
}

/// Metrics derived from a single content item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemMetrics {
    /// Lexicon sentiment, roughly -1.0 to 1.0 (not clamped)
    pub sentiment: f64,
    /// 0.0 (casual) to 1.0 (formal)
    pub formality: f64,
    /// Ranked keywords, most frequent first
    pub keywords: Vec<String>,
}

/// Output-facing per-platform summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformMetric {
    pub sentiment: f64,
    pub top_keywords: Vec<String>,
    pub formality: f64,
}

/// The complete consistency analysis for a set of content items.
///
/// All scores are integers on a 0-100 scale. `overall_score` is rounded from
/// the unrounded weighted sum, so it need not equal the weighted sum of the
/// three rounded dimension scores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsistencyResult {
    pub overall_score: u32,
    pub sentiment_consistency: u32,
    pub formality_consistency: u32,
    pub keyword_consistency: u32,
    /// Same order and length as the input items
    pub platform_metrics: Vec<PlatformMetric>,
    pub recommendations: Vec<String>,
}
