//! The read-only query capability the inference core consumes.

use crate::errors::ValenceResult;
use crate::models::polarity::Polarity;

/// Aggregate queries over the labeled training corpus.
///
/// All four methods distinguish "no rows" (a valid empty result) from an
/// infrastructure failure (`Err`). All counting is scoped to documents that
/// carry a label; unlabeled rows are invisible here. The store is read-only
/// from the inference core's perspective; labeling writes happen elsewhere
/// and must be visible to subsequent calls (read-after-write).
pub trait ICorpusReader: Send + Sync {
    /// Texts of labeled documents, any polarity, whose text matches the
    /// LIKE pattern. The relevance pre-check; callers refine in memory.
    fn texts_matching(
        &self,
        like: &str,
    ) -> impl std::future::Future<Output = ValenceResult<Vec<String>>> + Send;

    /// Total labeled document count.
    fn count_labeled(&self) -> impl std::future::Future<Output = ValenceResult<u64>> + Send;

    /// Labeled document count for one polarity.
    fn count_by_polarity(
        &self,
        polarity: Polarity,
    ) -> impl std::future::Future<Output = ValenceResult<u64>> + Send;

    /// Texts of labeled documents of one polarity matching the LIKE pattern,
    /// to be refined in memory by the caller's precise pattern.
    fn texts_by_polarity_matching(
        &self,
        polarity: Polarity,
        like: &str,
    ) -> impl std::future::Future<Output = ValenceResult<Vec<String>>> + Send;
}
