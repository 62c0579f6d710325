// Voicegrade: cross-platform brand voice consistency grading.
//
// This is the library root. Each module corresponds to a stage of the
// grading pipeline or a piece of its surrounding plumbing.

pub mod config;
pub mod error;
pub mod input;
pub mod models;
pub mod output;
pub mod scoring;
pub mod text;

pub use error::ConsistencyError;
pub use models::{ConsistencyResult, ContentItem, ItemMetrics, PlatformMetric};
pub use scoring::consistency::{analyze_consistency, ConsistencyAnalyzer};
