// Markdown report generation.
//
// Produces a self-contained report of one analysis: scores with their band,
// the per-platform table, and recommendations. Stamped with the UTC time the
// report was written.

use std::fmt::Write as _;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::info;

use crate::models::{ConsistencyResult, ContentItem};
use crate::scoring::band::{FormalityLabel, ScoreBand};

/// Render a markdown report for an analysis.
pub fn render_report(
    brand_name: &str,
    items: &[ContentItem],
    result: &ConsistencyResult,
    generated_at: DateTime<Utc>,
) -> String {
    let mut md = String::new();
    let brand = brand_name.trim();

    if brand.is_empty() {
        let _ = writeln!(md, "# Content Consistency Report");
    } else {
        let _ = writeln!(md, "# {brand} Content Consistency Report");
    }
    let _ = writeln!(md);
    let _ = writeln!(
        md,
        "Generated {} from {} content items.",
        generated_at.format("%Y-%m-%d %H:%M UTC"),
        items.len()
    );
    let _ = writeln!(md);

    let overall_band = ScoreBand::from_score(result.overall_score);
    let _ = writeln!(md, "## Scores");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Dimension | Score | Band |");
    let _ = writeln!(md, "|---|---:|---|");
    for (label, score) in [
        ("Overall", result.overall_score),
        ("Tone", result.sentiment_consistency),
        ("Voice", result.formality_consistency),
        ("Message", result.keyword_consistency),
    ] {
        let _ = writeln!(md, "| {label} | {score} | {} |", ScoreBand::from_score(score));
    }
    let _ = writeln!(md);
    let _ = writeln!(md, "{}", overall_band.interpretation());
    let _ = writeln!(md);

    let _ = writeln!(md, "## Platforms");
    let _ = writeln!(md);
    let _ = writeln!(md, "| Platform | Top Keywords | Sentiment | Formality |");
    let _ = writeln!(md, "|---|---|---:|---|");
    for (i, metric) in result.platform_metrics.iter().enumerate() {
        let _ = writeln!(
            md,
            "| {} | {} | {:.2} | {} |",
            escape_cell(&super::platform_label(items, i)),
            escape_cell(&metric.top_keywords.join(", ")),
            metric.sentiment,
            FormalityLabel::from_formality(metric.formality),
        );
    }
    let _ = writeln!(md);

    let _ = writeln!(md, "## Recommendations");
    let _ = writeln!(md);
    for recommendation in &result.recommendations {
        let _ = writeln!(md, "- {recommendation}");
    }

    md
}

/// Write a markdown report to `path`, creating parent directories as needed.
pub fn write_report(
    path: &Path,
    brand_name: &str,
    items: &[ContentItem],
    result: &ConsistencyResult,
) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
    }

    let report = render_report(brand_name, items, result, Utc::now());
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write report to {}", path.display()))?;

    info!(path = %path.display(), "Wrote consistency report");
    Ok(())
}

/// Default report file name for a brand, e.g. `acme-roasters-consistency.md`.
pub fn default_report_name(brand_name: &str) -> String {
    let slug: String = brand_name
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '-' })
        .collect();
    let slug: Vec<&str> = slug.split('-').filter(|s| !s.is_empty()).collect();

    if slug.is_empty() {
        "consistency-report.md".to_string()
    } else {
        format!("{}-consistency.md", slug.join("-"))
    }
}

fn escape_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::models::PlatformMetric;

    fn sample() -> (Vec<ContentItem>, ConsistencyResult) {
        let items = vec![
            ContentItem::new("Website", "coffee"),
            ContentItem::new("Blog | News", "coffee"),
        ];
        let result = ConsistencyResult {
            overall_score: 72,
            sentiment_consistency: 90,
            formality_consistency: 55,
            keyword_consistency: 70,
            platform_metrics: vec![
                PlatformMetric {
                    sentiment: 0.5,
                    top_keywords: vec!["coffee".to_string()],
                    formality: 0.9,
                },
                PlatformMetric {
                    sentiment: -0.25,
                    top_keywords: vec!["coffee".to_string(), "beans".to_string()],
                    formality: 0.1,
                },
            ],
            recommendations: vec!["Keep going.".to_string()],
        };
        (items, result)
    }

    #[test]
    fn test_render_report_contents() {
        let (items, result) = sample();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        let md = render_report("Acme", &items, &result, at);

        assert!(md.starts_with("# Acme Content Consistency Report"));
        assert!(md.contains("Generated 2026-03-01 09:30 UTC from 2 content items."));
        assert!(md.contains("| Overall | 72 | Fair |"));
        assert!(md.contains("| Voice | 55 | Weak |"));
        assert!(md.contains("| Website | coffee | 0.50 | Formal |"));
        assert!(md.contains("| Blog \\| News | coffee, beans | -0.25 | Casual |"));
        assert!(md.contains("- Keep going."));
    }

    #[test]
    fn test_default_report_name() {
        assert_eq!(default_report_name("Acme Roasters!"), "acme-roasters-consistency.md");
        assert_eq!(default_report_name("  "), "consistency-report.md");
    }
}
