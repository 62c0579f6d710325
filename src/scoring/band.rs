// Score bands and formality labels for renderers.
//
// Bands mirror the gauge colors: green at 80 and above, amber from 60,
// red below. Nothing in the engine depends on them.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoreBand {
    Weak,
    Fair,
    Strong,
}

impl ScoreBand {
    /// Determine the band from a 0-100 score.
    pub fn from_score(score: u32) -> Self {
        match score {
            s if s >= 80 => ScoreBand::Strong,
            s if s >= 60 => ScoreBand::Fair,
            _ => ScoreBand::Weak,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreBand::Weak => "Weak",
            ScoreBand::Fair => "Fair",
            ScoreBand::Strong => "Strong",
        }
    }

    /// One-line reading of an overall score in this band.
    pub fn interpretation(&self) -> &'static str {
        match self {
            ScoreBand::Strong => {
                "Excellent consistency across platforms! Your brand voice is clear and unified."
            }
            ScoreBand::Fair => {
                "Good consistency with some variations. Minor adjustments could improve brand cohesion."
            }
            ScoreBand::Weak => {
                "Significant inconsistencies detected. Your messaging varies considerably across platforms."
            }
        }
    }
}

impl std::fmt::Display for ScoreBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Coarse label for a formality score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormalityLabel {
    Casual,
    Neutral,
    Formal,
}

impl FormalityLabel {
    pub fn from_formality(formality: f64) -> Self {
        if formality < 0.4 {
            FormalityLabel::Casual
        } else if formality > 0.6 {
            FormalityLabel::Formal
        } else {
            FormalityLabel::Neutral
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FormalityLabel::Casual => "Casual",
            FormalityLabel::Neutral => "Neutral",
            FormalityLabel::Formal => "Formal",
        }
    }
}

impl std::fmt::Display for FormalityLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
