use serde::{Deserialize, Serialize};

use super::defaults;

/// Remote search / harvesting settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Search endpoint.
    pub base_url: String,
    /// Search query string (topic plus service-side filters).
    pub query: String,
    /// Language restriction.
    pub lang: String,
    /// Documents requested per page.
    pub page_size: usize,
    /// Bearer token. Usually left empty here and supplied via the
    /// `VALENCE_SEARCH_TOKEN` environment variable instead.
    pub token: Option<String>,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::DEFAULT_SEARCH_URL.to_string(),
            query: defaults::DEFAULT_SEARCH_QUERY.to_string(),
            lang: defaults::DEFAULT_SEARCH_LANG.to_string(),
            page_size: defaults::DEFAULT_PAGE_SIZE,
            token: None,
        }
    }
}
