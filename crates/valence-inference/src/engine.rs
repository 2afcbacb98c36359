//! InferenceEngine: acceptability gate → feature extraction → concurrent
//! per-feature scoring for both labels → guarded averaging → selection.

use std::sync::Arc;
use std::time::Duration;

use regex::Regex;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use valence_core::config::{FilterConfig, InferenceConfig, TokenizerConfig, ValenceConfig};
use valence_core::errors::{InferenceError, ValenceResult};
use valence_core::models::feature::Feature;
use valence_core::models::polarity::Polarity;
use valence_core::models::score::ScoreResult;
use valence_core::traits::ICorpusReader;
use valence_text::filter::acceptability;
use valence_text::pattern::MatchPattern;
use valence_text::tokenize::{trigram_windows, word_tokens};

use crate::counts::counts_for;
use crate::scorer;

/// Which feature kind an inspection runs on.
#[derive(Debug, Clone, Copy)]
enum FeatureMode {
    Word,
    Trigram,
}

/// The polarity inference engine. Generic over the corpus reader so tests
/// can substitute their own.
pub struct InferenceEngine<R> {
    reader: Arc<R>,
    filter: FilterConfig,
    config: InferenceConfig,
    exclude: Option<Regex>,
}

impl<R: ICorpusReader + 'static> InferenceEngine<R> {
    /// Build an engine from the workspace config.
    pub fn new(reader: Arc<R>, config: &ValenceConfig) -> ValenceResult<Self> {
        Self::with_parts(
            reader,
            config.filter.clone(),
            config.inference.clone(),
            &config.tokenizer,
        )
    }

    /// Build from individual sections.
    pub fn with_parts(
        reader: Arc<R>,
        filter: FilterConfig,
        config: InferenceConfig,
        tokenizer: &TokenizerConfig,
    ) -> ValenceResult<Self> {
        let exclude = if tokenizer.excluded_hashtag.is_empty() {
            None
        } else {
            Some(
                Regex::new(&tokenizer.excluded_hashtag).map_err(|e| {
                    InferenceError::BadExclusionPattern {
                        reason: e.to_string(),
                    }
                })?,
            )
        };
        Ok(Self {
            reader,
            filter,
            config,
            exclude,
        })
    }

    /// Classify a document on word features.
    pub async fn inspect(&self, text: &str) -> ValenceResult<ScoreResult> {
        self.run(text, FeatureMode::Word).await
    }

    /// Classify a document on trigram context features.
    pub async fn inspect_trigrams(&self, text: &str) -> ValenceResult<ScoreResult> {
        self.run(text, FeatureMode::Trigram).await
    }

    async fn run(&self, text: &str, mode: FeatureMode) -> ValenceResult<ScoreResult> {
        // Gate first: a rejected document must not touch storage at all.
        acceptability(text, &self.filter)
            .map_err(|reason| InferenceError::InputRejected { reason })?;

        let features: Vec<Feature> = match mode {
            FeatureMode::Word => word_tokens(text).into_iter().map(Feature::word).collect(),
            FeatureMode::Trigram => trigram_windows(text, self.exclude.as_ref()),
        };
        debug!(count = features.len(), ?mode, "extracted features");

        // The two branches never depend on each other; run them side by side.
        let (plus, minus) = tokio::join!(
            self.branch(Polarity::Plus, &features),
            self.branch(Polarity::Minus, &features),
        );

        if plus == minus {
            warn!(plus, minus, "aggregates tied, falling back to tie-break policy");
        }
        let label = if plus > minus {
            Polarity::Plus
        } else if minus > plus {
            Polarity::Minus
        } else {
            self.config.tie_break.label()
        };

        Ok(ScoreResult {
            label,
            likeliness: plus.max(minus),
            vs: plus.min(minus),
        })
    }

    /// Score every feature against one label concurrently and fold.
    ///
    /// Each task is capped by the feature timeout; timeouts, infrastructure
    /// failures, and panics all settle as zero so the join barrier always
    /// completes. The aggregate divides by the number of features that
    /// produced a strictly positive score, floored at one.
    async fn branch(&self, polarity: Polarity, features: &[Feature]) -> f64 {
        let timeout = Duration::from_millis(self.config.feature_timeout_ms);
        let mut tasks: JoinSet<f64> = JoinSet::new();

        for feature in features {
            let reader = Arc::clone(&self.reader);
            let pattern = MatchPattern::new(feature.clone());
            tasks.spawn(async move {
                match tokio::time::timeout(timeout, counts_for(reader.as_ref(), polarity, &pattern))
                    .await
                {
                    Ok(result) => scorer::score_or_zero(result, pattern.feature()),
                    Err(_) => {
                        warn!(feature = %pattern.feature(), %polarity, "feature scoring timed out");
                        0.0
                    }
                }
            });
        }

        let mut sum = 0.0;
        let mut relevant: u64 = 0;
        while let Some(settled) = tasks.join_next().await {
            let score = match settled {
                Ok(score) => score,
                Err(err) => {
                    warn!(%err, "feature task aborted");
                    0.0
                }
            };
            if score > 0.0 {
                relevant += 1;
            }
            sum += score;
        }

        let aggregate = sum / relevant.max(1) as f64;
        debug!(%polarity, aggregate, relevant, "branch settled");
        aggregate
    }
}
