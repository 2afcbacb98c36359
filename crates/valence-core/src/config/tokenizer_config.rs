use serde::{Deserialize, Serialize};

use super::defaults;

/// Tokenizer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenizerConfig {
    /// Regex matching hashtag tokens excluded from trigram features
    /// (the corpus topic tag and its variant spellings).
    pub excluded_hashtag: String,
}

impl Default for TokenizerConfig {
    fn default() -> Self {
        Self {
            excluded_hashtag: defaults::DEFAULT_EXCLUDED_HASHTAG.to_string(),
        }
    }
}
