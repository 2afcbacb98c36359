/// Harvesting / ingestion errors.
#[derive(Debug, thiserror::Error)]
pub enum HarvestError {
    #[error("search request failed: {message}")]
    Http { message: String },

    #[error("unexpected API payload: {message}")]
    Payload { message: String },

    #[error("pool file {path} unreadable: {message}")]
    PoolFile { path: String, message: String },

    #[error("no search token configured (set VALENCE_SEARCH_TOKEN)")]
    MissingToken,
}
