//! Features: the Bayesian evidence units extracted from a document.

use std::fmt;

/// One side of a trigram window: a literal token, or the boundary sentinel
/// meaning "no neighbor exists" at a document edge. The sentinel only shapes
/// the matching pattern; it is never treated as a literal word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Edge {
    Token(String),
    Boundary,
}

impl Edge {
    pub fn token(&self) -> Option<&str> {
        match self {
            Edge::Token(t) => Some(t),
            Edge::Boundary => None,
        }
    }
}

/// A single evidence unit. A `Word` is one normalized token. A `Trigram` is a
/// skip-gram context window `(left, *, right)` whose center matches any single
/// token.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Feature {
    Word(String),
    Trigram { left: Edge, right: Edge },
}

impl Feature {
    pub fn word(token: impl Into<String>) -> Self {
        Feature::Word(token.into())
    }

    pub fn trigram(left: Edge, right: Edge) -> Self {
        Feature::Trigram { left, right }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Word(w) => write!(f, "{w}"),
            Feature::Trigram { left, right } => {
                let l = left.token().unwrap_or("^");
                let r = right.token().unwrap_or("$");
                write!(f, "{l} * {r}")
            }
        }
    }
}
