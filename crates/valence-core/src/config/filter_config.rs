use serde::{Deserialize, Serialize};

use super::defaults;

/// Acceptability filter thresholds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Reject when a document carries more mentions than this.
    pub max_mentions: usize,
    /// Reject when a document carries more hashtags than this.
    pub max_hashtags: usize,
    /// Reject when mentions+hashtags together cover more than this fraction
    /// of the text.
    pub noise_ratio: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            max_mentions: defaults::DEFAULT_MAX_MENTIONS,
            max_hashtags: defaults::DEFAULT_MAX_HASHTAGS,
            noise_ratio: defaults::DEFAULT_NOISE_RATIO,
        }
    }
}
