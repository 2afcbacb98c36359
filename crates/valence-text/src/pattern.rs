//! Typed match patterns: a LIKE pre-filter for the storage layer and a
//! precise token-stream predicate for in-memory refinement.

use valence_core::models::feature::{Edge, Feature};

use crate::tokenize::word_tokens;

/// The matching semantics of one feature, independent of the storage
/// engine's pattern dialect. The coarse side (`like_pattern`) narrows
/// candidates in SQL; the precise side (`matches`) decides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPattern {
    feature: Feature,
}

impl MatchPattern {
    pub fn new(feature: Feature) -> Self {
        Self { feature }
    }

    pub fn feature(&self) -> &Feature {
        &self.feature
    }

    /// The SQL LIKE pre-filter. Queries using it must attach `ESCAPE '\'`.
    ///
    /// Word features pre-filter on the space-delimited token; trigram
    /// features on their literal sides joined by wildcards. A boundary side
    /// contributes nothing, so the pre-filter falls back to the literal side
    /// alone.
    pub fn like_pattern(&self) -> String {
        match &self.feature {
            Feature::Word(w) => format!("% {} %", escape_like(w)),
            Feature::Trigram { left, right } => match (left, right) {
                (Edge::Token(l), Edge::Token(r)) => {
                    format!("% {} % {} %", escape_like(l), escape_like(r))
                }
                (Edge::Boundary, Edge::Token(r)) => format!("% {} %", escape_like(r)),
                (Edge::Token(l), Edge::Boundary) => format!("% {} %", escape_like(l)),
                // Not produced by the windowing; matches everything.
                (Edge::Boundary, Edge::Boundary) => "%".to_string(),
            },
        }
    }

    /// Precise predicate over a candidate document's text, evaluated on its
    /// token stream.
    pub fn matches(&self, text: &str) -> bool {
        self.matches_tokens(&word_tokens(text))
    }

    /// Precise predicate over an already-tokenized stream.
    ///
    /// A word matches when any token equals it. A trigram matches when some
    /// window pairs its literals two positions apart; a boundary left anchors
    /// the window at the stream start, a boundary right at the stream end.
    pub fn matches_tokens(&self, tokens: &[String]) -> bool {
        match &self.feature {
            Feature::Word(w) => tokens.iter().any(|t| t == w),
            Feature::Trigram { left, right } => match (left, right) {
                (Edge::Token(l), Edge::Token(r)) => tokens
                    .windows(3)
                    .any(|win| win[0] == *l && win[2] == *r),
                (Edge::Boundary, Edge::Token(r)) => tokens.len() >= 2 && tokens[1] == *r,
                (Edge::Token(l), Edge::Boundary) => {
                    tokens.len() >= 2 && tokens[tokens.len() - 2] == *l
                }
                (Edge::Boundary, Edge::Boundary) => false,
            },
        }
    }
}

/// Escape LIKE metacharacters in a literal fragment. The backslash doubles as
/// the escape character, so it is escaped first.
fn escape_like(fragment: &str) -> String {
    let mut out = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}
