// Unit tests for scoring and output helpers.
//
// Tests isolated pure functions: ScoreBand boundaries, recommendation rule
// ordering, spread/percent arithmetic, mean pairwise similarity, and
// truncate_chars UTF-8 safety.

use std::collections::HashSet;

use voicegrade::models::ContentItem;
use voicegrade::output::{platform_label, truncate_chars};
use voicegrade::scoring::band::ScoreBand;
use voicegrade::scoring::consistency::{
    mean_pairwise_similarity, spread_consistency, to_percent, ConsistencyWeights, DimensionScores,
};
use voicegrade::scoring::recommendations::{
    generate_recommendations, CONSISTENT_MESSAGE, FORMALITY_ADVISORY, MESSAGING_ADVISORY,
    TONE_ADVISORY,
};
use voicegrade::text::similarity::EmptyKeywordPolicy;
use voicegrade::ConsistencyError;

fn set(words: &[&str]) -> HashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

// ============================================================
// ScoreBand: gauge color thresholds
// ============================================================

#[test]
fn band_display_matches_as_str() {
    for band in [ScoreBand::Weak, ScoreBand::Fair, ScoreBand::Strong] {
        assert_eq!(band.to_string(), band.as_str());
    }
}

#[test]
fn band_interpretations_differ() {
    let texts: HashSet<&str> = [ScoreBand::Weak, ScoreBand::Fair, ScoreBand::Strong]
        .iter()
        .map(|b| b.interpretation())
        .collect();
    assert_eq!(texts.len(), 3);
}

// ============================================================
// Recommendations: rule ordering
// ============================================================

#[test]
fn recommendations_tone_and_formality() {
    let recs = generate_recommendations(0.5, 0.69, 0.9);
    assert_eq!(recs, vec![TONE_ADVISORY, FORMALITY_ADVISORY]);
}

#[test]
fn recommendations_tone_and_messaging_skip_formality() {
    let recs = generate_recommendations(0.0, 1.0, 0.0);
    assert_eq!(recs, vec![TONE_ADVISORY, MESSAGING_ADVISORY]);
}

#[test]
fn recommendations_fallback_never_mixed_with_advisories() {
    let recs = generate_recommendations(0.69, 1.0, 1.0);
    assert!(!recs.iter().any(|r| r == CONSISTENT_MESSAGE));
}

// ============================================================
// Spread and percent arithmetic
// ============================================================

#[test]
fn spread_three_values_population_variance() {
    // mean 0.5, deviations -0.5, 0, 0.5 -> variance 1/6
    let score = spread_consistency(&[0.0, 0.5, 1.0]);
    let expected = 1.0 - (1.0f64 / 6.0).sqrt();
    assert!((score - expected).abs() < 1e-12, "got {score}");
}

#[test]
fn spread_single_value_is_perfect() {
    assert_eq!(spread_consistency(&[3.7]), 1.0);
}

#[test]
fn percent_extremes() {
    assert_eq!(to_percent(0.0), 0);
    assert_eq!(to_percent(1.0), 100);
}

#[test]
fn overall_fraction_uses_default_weights() {
    let dims = DimensionScores {
        sentiment: 1.0,
        formality: 0.0,
        keyword: 0.5,
    };
    let overall = dims.overall_fraction(&ConsistencyWeights::default());
    assert!((overall - 0.5).abs() < 1e-12, "got {overall}");
}

// ============================================================
// Mean pairwise similarity
// ============================================================

#[test]
fn pairwise_averages_all_pairs() {
    // (a,b) = 1.0, (a,c) = 0.0, (b,c) = 0.0 -> 1/3
    let sets = [set(&["coffee"]), set(&["coffee"]), set(&["tea"])];
    let mean = mean_pairwise_similarity(&sets, EmptyKeywordPolicy::Identical).unwrap();
    assert!((mean - 1.0 / 3.0).abs() < 1e-12, "got {mean}");
}

#[test]
fn pairwise_no_pairs_is_zero() {
    let sets = [set(&["coffee"])];
    assert_eq!(
        mean_pairwise_similarity(&sets, EmptyKeywordPolicy::Identical).unwrap(),
        0.0
    );
}

#[test]
fn pairwise_reject_reports_first_degenerate_pair() {
    let sets = [set(&["coffee"]), set(&[]), set(&[])];
    let result = mean_pairwise_similarity(&sets, EmptyKeywordPolicy::Reject);
    assert_eq!(
        result,
        Err(ConsistencyError::DegenerateSimilarity { first: 1, second: 2 })
    );
}

#[test]
fn pairwise_disjoint_policy_scores_empty_pair_zero() {
    let sets = [set(&[]), set(&[])];
    assert_eq!(
        mean_pairwise_similarity(&sets, EmptyKeywordPolicy::Disjoint).unwrap(),
        0.0
    );
}

// ============================================================
// Output helpers
// ============================================================

#[test]
fn truncate_short_string_unchanged() {
    assert_eq!(truncate_chars("coffee", 10), "coffee");
}

#[test]
fn truncate_multibyte_safe() {
    assert_eq!(truncate_chars("☕☕☕☕", 2), "☕☕...");
}

#[test]
fn platform_label_falls_back_to_position() {
    let items = vec![ContentItem::new("Website", "x"), ContentItem::new("  ", "y")];
    assert_eq!(platform_label(&items, 0), "Website");
    assert_eq!(platform_label(&items, 1), "Platform 2");
    assert_eq!(platform_label(&items, 5), "Platform 6");
}
