//! Default values shared by the config structs.

/// Mentions allowed before a document is rejected outright.
pub const DEFAULT_MAX_MENTIONS: usize = 4;

/// Hashtags allowed before a document is rejected outright.
pub const DEFAULT_MAX_HASHTAGS: usize = 7;

/// Combined mention+hashtag mass (fraction of text length) above which a
/// document is rejected.
pub const DEFAULT_NOISE_RATIO: f64 = 0.6;

/// Per-feature storage query timeout.
pub const DEFAULT_FEATURE_TIMEOUT_MS: u64 = 5_000;

/// Read pool size for the SQLite store.
pub const DEFAULT_READ_POOL_SIZE: usize = 4;

/// Database file name.
pub const DEFAULT_DB_PATH: &str = "pool.sqlite";

/// Hashtag spellings excluded from trigram features. The dataset's own topic
/// tag must not act as a discriminating feature, variant spellings included.
pub const DEFAULT_EXCLUDED_HASHTAG: &str = r"(?i)^#r[ée]gionales2015$";

/// Search endpoint for harvesting.
pub const DEFAULT_SEARCH_URL: &str = "https://api.twitter.com/1.1/search/tweets.json";

/// Search query for harvesting.
pub const DEFAULT_SEARCH_QUERY: &str = "#regionales2015 -filter:images -filter:links -filter:retweets";

/// Language restriction for harvested documents.
pub const DEFAULT_SEARCH_LANG: &str = "fr";

/// Documents requested per search page.
pub const DEFAULT_PAGE_SIZE: usize = 100;
