// Submission loading and validation.
//
// A submission is a brand name plus the per-platform content the user wants
// compared. Validation collects every problem at once so the user can fix
// them in one pass; the scoring engine performs its own minimal checks
// regardless.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::ContentItem;
use crate::scoring::consistency::MIN_ITEMS;

/// Platform labels offered for content items.
pub const DEFAULT_PLATFORMS: [&str; 14] = [
    "Website",
    "Twitter",
    "Instagram",
    "Facebook",
    "LinkedIn",
    "Email Newsletter",
    "Press Release",
    "Blog",
    "YouTube",
    "TikTok",
    "Pinterest",
    "Product Packaging",
    "Advertising Copy",
    "Other",
];

/// Whether `label` is one of the standard platform labels (case-insensitive).
pub fn is_known_platform(label: &str) -> bool {
    DEFAULT_PLATFORMS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(label.trim()))
}

/// A brand's content set, as loaded from JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    #[serde(alias = "brand")]
    pub brand_name: String,
    #[serde(alias = "items")]
    pub content_items: Vec<ContentItem>,
}

impl Submission {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Submission JSON is malformed")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read submission {}", path.display()))?;
        Self::from_json(&json).with_context(|| format!("Failed to parse {}", path.display()))
    }
}

/// A single problem with a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationIssue {
    MissingBrandName,
    TooFewItems { provided: usize },
    EmptyContent { index: usize },
    ContentTooShort { index: usize, min_chars: usize },
    DuplicatePlatforms(Vec<String>),
}

impl std::fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationIssue::MissingBrandName => write!(f, "Brand name is required"),
            ValidationIssue::TooFewItems { provided } => write!(
                f,
                "You need at least two platforms to analyze consistency (got {provided})"
            ),
            ValidationIssue::EmptyContent { index } => {
                write!(f, "Item {}: content cannot be empty", index + 1)
            }
            ValidationIssue::ContentTooShort { index, min_chars } => write!(
                f,
                "Item {}: content should be at least {min_chars} characters",
                index + 1
            ),
            ValidationIssue::DuplicatePlatforms(labels) => {
                write!(f, "Duplicate platforms detected: {}", labels.join(", "))
            }
        }
    }
}

/// Check a submission and return every issue found. Empty means valid.
///
/// Each item reports at most one content issue: blank content wins over
/// short content. Duplicate labels are listed once per repeat, in order.
pub fn validate_submission(
    brand_name: &str,
    items: &[ContentItem],
    min_content_chars: usize,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    if brand_name.trim().is_empty() {
        issues.push(ValidationIssue::MissingBrandName);
    }

    if items.len() < MIN_ITEMS {
        issues.push(ValidationIssue::TooFewItems {
            provided: items.len(),
        });
    }

    let duplicates: Vec<String> = items
        .iter()
        .enumerate()
        .filter(|(i, item)| items[..*i].iter().any(|prev| prev.platform == item.platform))
        .map(|(_, item)| item.platform.clone())
        .collect();
    if !duplicates.is_empty() {
        issues.push(ValidationIssue::DuplicatePlatforms(duplicates));
    }

    for (index, item) in items.iter().enumerate() {
        let trimmed = item.text.trim();
        if trimmed.is_empty() {
            issues.push(ValidationIssue::EmptyContent { index });
        } else if trimmed.chars().count() < min_content_chars {
            issues.push(ValidationIssue::ContentTooShort {
                index,
                min_chars: min_content_chars,
            });
        }
    }

    issues
}

/// Parse a `PLATFORM=PATH` pair from the command line.
pub fn parse_item_spec(spec: &str) -> Result<(String, String)> {
    let (platform, path) = spec
        .split_once('=')
        .with_context(|| format!("Expected PLATFORM=FILE, got '{spec}'"))?;

    let platform = platform.trim();
    let path = path.trim();
    if platform.is_empty() || path.is_empty() {
        anyhow::bail!("Expected PLATFORM=FILE, got '{spec}'");
    }

    Ok((platform.to_string(), path.to_string()))
}
