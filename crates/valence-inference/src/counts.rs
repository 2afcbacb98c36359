//! Count provider: the five-count summary for one (feature, polarity) pair.

use tracing::{debug, warn};

use valence_core::errors::ValenceResult;
use valence_core::models::counts::{CountsOutcome, PolarityCountSet};
use valence_core::models::polarity::Polarity;
use valence_core::traits::ICorpusReader;
use valence_text::pattern::MatchPattern;

/// Compute the count set for `pattern` against `polarity`.
///
/// Stage one is the relevance gate: a coarse LIKE scan over the labeled
/// corpus, refined in memory by the precise pattern. No surviving candidate
/// means `NoEvidence`; a failure of the gate query itself also maps to
/// `NoEvidence`.
///
/// Stage two launches the three aggregates concurrently and waits for all of
/// them; no partial assembly. A failure in any of the three surfaces as an
/// infrastructure error.
pub async fn counts_for<R: ICorpusReader>(
    reader: &R,
    polarity: Polarity,
    pattern: &MatchPattern,
) -> ValenceResult<CountsOutcome> {
    let like = pattern.like_pattern();

    let candidates = match reader.texts_matching(&like).await {
        Ok(rows) => rows,
        Err(err) => {
            warn!(feature = %pattern.feature(), %err, "relevance pre-check failed, treating as no evidence");
            return Ok(CountsOutcome::NoEvidence);
        }
    };

    let all_docs_w_feature = candidates.iter().filter(|t| pattern.matches(t)).count() as u64;
    if all_docs_w_feature == 0 {
        debug!(feature = %pattern.feature(), "no corpus occurrence");
        return Ok(CountsOutcome::NoEvidence);
    }

    let (all_docs, pol_docs, pol_texts) = tokio::try_join!(
        reader.count_labeled(),
        reader.count_by_polarity(polarity),
        reader.texts_by_polarity_matching(polarity, &like),
    )?;

    let pol_docs_w_feature = pol_texts.iter().filter(|t| pattern.matches(t)).count() as u64;

    Ok(CountsOutcome::Counts(PolarityCountSet::new(
        all_docs,
        all_docs_w_feature,
        pol_docs,
        pol_docs_w_feature,
    )))
}
