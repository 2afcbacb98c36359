//! Bayes feature scorer: one count set in, one likelihood weight out.

use tracing::warn;

use valence_core::errors::ValenceResult;
use valence_core::models::counts::{CountsOutcome, PolarityCountSet};
use valence_core::models::feature::Feature;

/// Weight of a feature as evidence for the target polarity.
///
/// `P(pol) * P(feature | pol) / P(feature)`, with an empty-denominator guard:
/// a zero `P(feature)` divides by 1 instead. A likelihood-style weight, not a
/// normalized probability; values above 1 are common for discriminating
/// features.
pub fn score(counts: &PolarityCountSet) -> f64 {
    if counts.all_docs == 0 {
        return 0.0;
    }
    let all_docs = counts.all_docs as f64;
    let p_pol = counts.pol_docs as f64 / all_docs;
    let p_feat_given_pol = counts.pol_docs_w_feature as f64 / counts.pol_docs.max(1) as f64;
    let p_feat = counts.all_docs_w_feature as f64 / all_docs;

    let divisor = if p_feat == 0.0 { 1.0 } else { p_feat };
    p_pol * p_feat_given_pol / divisor
}

/// Score a count-provider outcome: `NoEvidence` is worth exactly zero.
pub fn score_outcome(outcome: &CountsOutcome) -> f64 {
    match outcome {
        CountsOutcome::NoEvidence => 0.0,
        CountsOutcome::Counts(counts) => score(counts),
    }
}

/// Absorb an infrastructure failure from the count provider into a zero
/// contribution, so one broken feature query never takes its siblings down.
pub fn score_or_zero(result: ValenceResult<CountsOutcome>, feature: &Feature) -> f64 {
    match result {
        Ok(outcome) => score_outcome(&outcome),
        Err(err) => {
            warn!(%feature, %err, "count query failed, feature contributes nothing");
            0.0
        }
    }
}
