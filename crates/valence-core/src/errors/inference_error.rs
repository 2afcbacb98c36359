use std::fmt;

/// Why the acceptability filter refused a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    TooManyMentions,
    TooManyHashtags,
    NoiseDominates,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::TooManyMentions => "too many mentions",
            RejectReason::TooManyHashtags => "too many hashtags",
            RejectReason::NoiseDominates => "mentions and hashtags dominate the text",
        };
        f.write_str(s)
    }
}

/// Inference subsystem errors.
#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    /// The document failed the acceptability filter. Raised before any
    /// storage query is issued.
    #[error("input rejected: {reason}")]
    InputRejected { reason: RejectReason },

    /// The trigram exclusion pattern in the config does not compile.
    #[error("invalid exclusion pattern: {reason}")]
    BadExclusionPattern { reason: String },
}
