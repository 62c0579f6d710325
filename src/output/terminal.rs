// Colored terminal output for consistency results.
//
// Gauges are drawn as fixed-width bars colored by score band, followed by
// the per-platform table and the recommendation list.

use colored::Colorize;

use crate::models::{ConsistencyResult, ContentItem, ItemMetrics};
use crate::scoring::band::{FormalityLabel, ScoreBand};
use crate::text::lexicon::WordListLexicon;

const BAR_WIDTH: usize = 20;

/// Display a full consistency analysis.
pub fn display_result(brand_name: &str, items: &[ContentItem], result: &ConsistencyResult) {
    let title = if brand_name.trim().is_empty() {
        "=== Content Consistency Analysis ===".to_string()
    } else {
        format!("=== {} Content Consistency Analysis ===", brand_name.trim())
    };
    println!("\n{}", title.bold());
    println!();

    let overall_band = ScoreBand::from_score(result.overall_score);
    println!(
        "  {:<22} {} {:>3}%  {}",
        "Overall Consistency".bold(),
        gauge(result.overall_score),
        result.overall_score,
        colorize_band(overall_band)
    );
    println!("  {}", overall_band.interpretation().dimmed());
    println!();

    for (label, score) in [
        ("Tone Consistency", result.sentiment_consistency),
        ("Voice Consistency", result.formality_consistency),
        ("Message Consistency", result.keyword_consistency),
    ] {
        println!("  {:<22} {} {:>3}%", label, gauge(score), score);
    }

    println!("\n{}", "=== Key Message Consistency ===".bold());
    println!();
    println!(
        "  {:<20} {:<44} {:>9}  {:<9}",
        "Platform".dimmed(),
        "Top Keywords".dimmed(),
        "Sentiment".dimmed(),
        "Formality".dimmed(),
    );
    println!("  {}", "-".repeat(86).dimmed());

    for (i, metric) in result.platform_metrics.iter().enumerate() {
        let label = super::truncate_chars(&super::platform_label(items, i), 18);
        let keywords = super::truncate_chars(&metric.top_keywords.join(", "), 41);
        println!(
            "  {:<20} {:<44} {:>9}  {:<9}",
            label,
            keywords,
            colorize_sentiment(metric.sentiment),
            FormalityLabel::from_formality(metric.formality).as_str(),
        );
    }

    println!("\n{}", "=== Recommendations ===".bold());
    println!();
    for recommendation in &result.recommendations {
        println!("  - {recommendation}");
    }
    println!();
}

/// Display metrics for a single text.
pub fn display_item_metrics(source: &str, token_count: usize, metrics: &ItemMetrics) {
    println!("\n{}", format!("=== Metrics for {source} ===").bold());
    println!("  Tokens: {token_count}");
    println!("  Sentiment: {}", colorize_sentiment(metrics.sentiment));
    println!(
        "  Formality: {:.2} ({})",
        metrics.formality,
        FormalityLabel::from_formality(metrics.formality)
    );
    if metrics.keywords.is_empty() {
        println!("  Keywords: {}", "none".dimmed());
    } else {
        println!("  Keywords: {}", metrics.keywords.join(", "));
    }
}

/// Display the active word lists.
pub fn display_lexicon(lexicon: &WordListLexicon, source: &str) {
    println!("\n{}", format!("=== Lexicon ({source}) ===").bold());
    for (label, words) in [
        ("Positive", &lexicon.positive),
        ("Negative", &lexicon.negative),
        ("Formal", &lexicon.formal),
        ("Casual", &lexicon.casual),
    ] {
        let list: Vec<&str> = words.iter().map(String::as_str).collect();
        println!("  {:<9} ({:>2}) {}", label, words.len(), list.join(", ").dimmed());
    }
}

/// Build a fixed-width bar for a 0-100 score, colored by band.
fn gauge(score: u32) -> colored::ColoredString {
    let filled = ((score.min(100) as usize) * BAR_WIDTH + 50) / 100;
    let empty = BAR_WIDTH.saturating_sub(filled);
    let bar = format!("[{}{}]", "=".repeat(filled), " ".repeat(empty));

    match ScoreBand::from_score(score) {
        ScoreBand::Strong => bar.bright_green(),
        ScoreBand::Fair => bar.bright_yellow(),
        ScoreBand::Weak => bar.bright_red(),
    }
}

fn colorize_band(band: ScoreBand) -> colored::ColoredString {
    match band {
        ScoreBand::Strong => band.as_str().green().bold(),
        ScoreBand::Fair => band.as_str().yellow(),
        ScoreBand::Weak => band.as_str().red().bold(),
    }
}

fn colorize_sentiment(sentiment: f64) -> colored::ColoredString {
    let text = format!("{sentiment:+.2}");
    if sentiment < 0.0 {
        text.red()
    } else if sentiment > 0.0 {
        text.green()
    } else {
        text.normal()
    }
}
