//! Traits at the crate seams.

mod corpus;

pub use corpus::ICorpusReader;
