// Consistency aggregator: the core of the grading pipeline.
//
// Given an ordered list of content items, this module:
// 1. Extracts sentiment, formality, and keywords for every item
// 2. Scores sentiment and formality by how little they spread
// 3. Scores keywords by mean pairwise Jaccard similarity
// 4. Combines the three into a weighted overall score
// 5. Attaches recommendations computed from the unrounded fractions
//
// Every step is a pure function of the input. Identical input always
// produces an identical result.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::error::ConsistencyError;
use crate::models::{ConsistencyResult, ContentItem, ItemMetrics, PlatformMetric};
use crate::scoring::recommendations::generate_recommendations;
use crate::text::formality::formality_with;
use crate::text::keywords::{keywords, DEFAULT_KEYWORD_COUNT};
use crate::text::lexicon::WordListLexicon;
use crate::text::sentiment::sentiment_with;
use crate::text::similarity::{self, EmptyKeywordPolicy};
use crate::text::traits::LexiconProvider;

/// Minimum number of items needed for a comparison.
pub const MIN_ITEMS: usize = 2;

/// Weights for the overall score. They sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsistencyWeights {
    pub sentiment: f64,
    pub formality: f64,
    pub keyword: f64,
}

impl Default for ConsistencyWeights {
    fn default() -> Self {
        Self {
            sentiment: 0.3,
            formality: 0.3,
            keyword: 0.4,
        }
    }
}

/// Unrounded dimension scores, each 0.0 to 1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DimensionScores {
    pub sentiment: f64,
    pub formality: f64,
    pub keyword: f64,
}

impl DimensionScores {
    /// Weighted overall fraction (0.0 to 1.0), before scaling or rounding.
    pub fn overall_fraction(&self, weights: &ConsistencyWeights) -> f64 {
        self.sentiment * weights.sentiment
            + self.formality * weights.formality
            + self.keyword * weights.keyword
    }
}

/// Convert a 0.0-1.0 fraction to a rounded 0-100 score.
///
/// `f64::round` rounds halves away from zero; fractions here are never
/// negative, so .5 always rounds up.
pub fn to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round() as u32
}

/// Consistency of a metric across items: 1 minus the population standard
/// deviation, floored at 0.0.
///
/// Identical values give exactly 1.0. An empty slice also gives 1.0.
pub fn spread_consistency(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 1.0;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;

    1.0 - variance.sqrt().min(1.0)
}

/// Mean Jaccard similarity over every unordered pair of keyword sets.
///
/// Zero pairs yield 0.0. Fails only when a pair has no keywords on either
/// side and the policy is [`EmptyKeywordPolicy::Reject`].
pub fn mean_pairwise_similarity(
    sets: &[HashSet<String>],
    policy: EmptyKeywordPolicy,
) -> Result<f64, ConsistencyError> {
    let mut sum = 0.0;
    let mut pairs = 0usize;

    for i in 0..sets.len() {
        for j in (i + 1)..sets.len() {
            let raw = similarity::jaccard(&sets[i], &sets[j]);
            let score = similarity::resolve(raw, policy).ok_or(
                ConsistencyError::DegenerateSimilarity {
                    first: i,
                    second: j,
                },
            )?;
            debug!(first = i, second = j, similarity = score, "Compared keyword sets");
            sum += score;
            pairs += 1;
        }
    }

    if pairs == 0 {
        Ok(0.0)
    } else {
        Ok(sum / pairs as f64)
    }
}

/// Scores a set of content items for cross-platform consistency.
///
/// The lexicon is injectable so a different word source (or a model-backed
/// classifier) can replace the built-in lists without touching aggregation.
pub struct ConsistencyAnalyzer {
    lexicon: Box<dyn LexiconProvider>,
    pub weights: ConsistencyWeights,
    pub empty_keyword_policy: EmptyKeywordPolicy,
}

impl Default for ConsistencyAnalyzer {
    fn default() -> Self {
        Self::new(WordListLexicon::default())
    }
}

impl ConsistencyAnalyzer {
    pub fn new(lexicon: impl LexiconProvider + 'static) -> Self {
        Self {
            lexicon: Box::new(lexicon),
            weights: ConsistencyWeights::default(),
            empty_keyword_policy: EmptyKeywordPolicy::default(),
        }
    }

    pub fn with_empty_keyword_policy(mut self, policy: EmptyKeywordPolicy) -> Self {
        self.empty_keyword_policy = policy;
        self
    }

    /// The lexicon used for sentiment and formality.
    pub fn lexicon(&self) -> &dyn LexiconProvider {
        self.lexicon.as_ref()
    }

    /// Metrics for a single text. Never fails, even for empty input.
    pub fn item_metrics(&self, text: &str) -> ItemMetrics {
        ItemMetrics {
            sentiment: sentiment_with(self.lexicon(), text),
            formality: formality_with(self.lexicon(), text),
            keywords: keywords(text, DEFAULT_KEYWORD_COUNT),
        }
    }

    /// Unrounded dimension scores for a validated item list.
    pub fn dimension_scores(
        &self,
        items: &[ContentItem],
    ) -> Result<DimensionScores, ConsistencyError> {
        validate(items)?;
        let metrics: Vec<ItemMetrics> = items.iter().map(|i| self.item_metrics(&i.text)).collect();
        self.score_dimensions(items, &metrics)
    }

    /// Run the full analysis and build the result.
    pub fn analyze(&self, items: &[ContentItem]) -> Result<ConsistencyResult, ConsistencyError> {
        validate(items)?;

        // Step 1: Per-item metrics, input order preserved
        let metrics: Vec<ItemMetrics> = items.iter().map(|i| self.item_metrics(&i.text)).collect();

        // Steps 2-4: Dimension scores
        let dims = self.score_dimensions(items, &metrics)?;

        // Step 5: Overall score from the unrounded fractions
        let overall_score = to_percent(dims.overall_fraction(&self.weights));

        let platform_metrics: Vec<PlatformMetric> = metrics
            .into_iter()
            .map(|m| PlatformMetric {
                sentiment: m.sentiment,
                top_keywords: m.keywords.into_iter().take(DEFAULT_KEYWORD_COUNT).collect(),
                formality: m.formality,
            })
            .collect();

        let recommendations = generate_recommendations(dims.sentiment, dims.formality, dims.keyword);

        info!(
            items = items.len(),
            overall = overall_score,
            sentiment = format!("{:.2}", dims.sentiment),
            formality = format!("{:.2}", dims.formality),
            keyword = format!("{:.2}", dims.keyword),
            recommendations = recommendations.len(),
            "Scored content set"
        );

        Ok(ConsistencyResult {
            overall_score,
            sentiment_consistency: to_percent(dims.sentiment),
            formality_consistency: to_percent(dims.formality),
            keyword_consistency: to_percent(dims.keyword),
            platform_metrics,
            recommendations,
        })
    }

    fn score_dimensions(
        &self,
        items: &[ContentItem],
        metrics: &[ItemMetrics],
    ) -> Result<DimensionScores, ConsistencyError> {
        let sentiments: Vec<f64> = metrics.iter().map(|m| m.sentiment).collect();
        let formalities: Vec<f64> = metrics.iter().map(|m| m.formality).collect();

        // Pairwise comparison uses a wider keyword window than the summary
        let keyword_sets: Vec<HashSet<String>> =
            items.iter().map(|i| similarity::keyword_set(&i.text)).collect();

        Ok(DimensionScores {
            sentiment: spread_consistency(&sentiments),
            formality: spread_consistency(&formalities),
            keyword: mean_pairwise_similarity(&keyword_sets, self.empty_keyword_policy)?,
        })
    }
}

/// Analyze items with the built-in lexicon and default policy.
pub fn analyze_consistency(items: &[ContentItem]) -> Result<ConsistencyResult, ConsistencyError> {
    ConsistencyAnalyzer::default().analyze(items)
}

fn validate(items: &[ContentItem]) -> Result<(), ConsistencyError> {
    if items.len() < MIN_ITEMS {
        return Err(ConsistencyError::InsufficientInput {
            provided: items.len(),
        });
    }

    if let Some((index, item)) = items
        .iter()
        .enumerate()
        .find(|(_, item)| item.text.trim().is_empty())
    {
        return Err(ConsistencyError::EmptyContent {
            index,
            platform: item.platform.clone(),
        });
    }

    Ok(())
}
