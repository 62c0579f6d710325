// Engine error types.
//
// The scoring engine reports typed errors so callers can show guidance
// (e.g. "add another platform") instead of a broken result. Everything
// outside the engine uses anyhow.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConsistencyError {
    #[error("Need at least two content items to compare, got {provided}")]
    InsufficientInput { provided: usize },

    #[error("Content item {index} ({platform}) is empty")]
    EmptyContent { index: usize, platform: String },

    #[error("Content items {first} and {second} both have no keywords to compare")]
    DegenerateSimilarity { first: usize, second: usize },
}
