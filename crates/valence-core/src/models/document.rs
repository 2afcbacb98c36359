//! A stored short-text document and the corpus partition it lives in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::polarity::Polarity;

/// Which corpus partition a document belongs to. Training documents are the
/// ones the labeling loop walks and the count queries aggregate over; working
/// documents are the pool the inspection tools sample from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorpusSet {
    Training,
    Working,
}

impl CorpusSet {
    pub fn as_str(&self) -> &'static str {
        match self {
            CorpusSet::Training => "training",
            CorpusSet::Working => "working",
        }
    }
}

/// A harvested document. The label is set at most once, by the labeling CLI;
/// the inference core only ever reads documents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Stable external identifier (the upstream service's id string).
    pub doc_id: String,
    pub text: String,
    /// `None` until a human has labeled the document.
    pub polarity: Option<Polarity>,
    pub corpus: CorpusSet,
    pub fetched_at: DateTime<Utc>,
}

impl Document {
    /// A fresh, unlabeled document stamped now.
    pub fn new(doc_id: impl Into<String>, text: impl Into<String>, corpus: CorpusSet) -> Self {
        Self {
            doc_id: doc_id.into(),
            text: text.into(),
            polarity: None,
            corpus,
            fetched_at: Utc::now(),
        }
    }
}
