//! Inference results and the tie-break policy.

use serde::{Deserialize, Serialize};

use super::polarity::Polarity;

/// What `inspect` returns: the winning label with its aggregate score, and
/// the losing aggregate for comparison.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub label: Polarity,
    /// The winning polarity's aggregate. A likelihood-style weight, not a
    /// normalized probability; may exceed 1.
    pub likeliness: f64,
    /// The losing polarity's aggregate.
    pub vs: f64,
}

/// Which label wins when both polarity aggregates are exactly equal.
/// A tie is logged as a warning but still resolves deterministically.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TieBreak {
    /// Ties go to `-`.
    #[default]
    Negative,
    /// Ties go to `+`.
    Positive,
}

impl TieBreak {
    pub fn label(&self) -> Polarity {
        match self {
            TieBreak::Negative => Polarity::Minus,
            TieBreak::Positive => Polarity::Plus,
        }
    }
}
