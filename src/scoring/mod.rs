// Consistency scoring: aggregation, recommendations, and score bands.

pub mod band;
pub mod consistency;
pub mod recommendations;
