//! The five-count statistical summary behind a feature's likelihood weight.

use serde::{Deserialize, Serialize};

/// Aggregate counts for one (feature, target polarity) pair against the
/// labeled corpus. Computed fresh on every call; never persisted.
///
/// Invariant: `pol_docs_w_feature <= pol_docs <= all_docs` and
/// `all_docs_w_feature <= all_docs`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolarityCountSet {
    /// Total labeled documents.
    pub all_docs: u64,
    /// Labeled documents, any polarity, whose text matches the feature.
    pub all_docs_w_feature: u64,
    /// Labeled documents of the target polarity.
    pub pol_docs: u64,
    /// `all_docs - pol_docs`.
    pub non_pol_docs: u64,
    /// Labeled documents of the target polarity matching the feature.
    pub pol_docs_w_feature: u64,
}

impl PolarityCountSet {
    /// Assemble a count set, deriving `non_pol_docs`.
    pub fn new(all_docs: u64, all_docs_w_feature: u64, pol_docs: u64, pol_docs_w_feature: u64) -> Self {
        Self {
            all_docs,
            all_docs_w_feature,
            pol_docs,
            non_pol_docs: all_docs.saturating_sub(pol_docs),
            pol_docs_w_feature,
        }
    }

    /// Whether the invariant holds. Count queries are expected to always
    /// produce valid sets; this exists for tests and debug assertions.
    pub fn is_valid(&self) -> bool {
        self.pol_docs_w_feature <= self.pol_docs
            && self.pol_docs <= self.all_docs
            && self.all_docs_w_feature <= self.all_docs
            && self.non_pol_docs == self.all_docs - self.pol_docs
    }
}

/// Outcome of a count computation. `NoEvidence` means the feature never
/// occurs in the corpus (or the relevance pre-check could not establish that
/// it does); it is a signal, not an error, and scores as zero. Infrastructure
/// failures travel as `Err`, never as `NoEvidence`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountsOutcome {
    NoEvidence,
    Counts(PolarityCountSet),
}

impl CountsOutcome {
    pub fn counts(&self) -> Option<&PolarityCountSet> {
        match self {
            CountsOutcome::Counts(c) => Some(c),
            CountsOutcome::NoEvidence => None,
        }
    }
}
