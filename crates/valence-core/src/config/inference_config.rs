use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::score::TieBreak;

/// Inference engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct InferenceConfig {
    /// Upper bound on a single feature's count queries. A feature that blows
    /// this budget contributes zero instead of hanging the join barrier.
    pub feature_timeout_ms: u64,
    /// Which label wins an exact tie between the two polarity aggregates.
    pub tie_break: TieBreak,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            feature_timeout_ms: defaults::DEFAULT_FEATURE_TIMEOUT_MS,
            tie_break: TieBreak::default(),
        }
    }
}
