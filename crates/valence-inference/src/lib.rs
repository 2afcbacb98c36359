//! # valence-inference
//!
//! The probabilistic core: per-feature count aggregation against the labeled
//! corpus, Bayesian likelihood weights, and the engine that fans scoring out
//! across features and both polarity labels before folding the results into
//! a verdict.

pub mod counts;
pub mod engine;
pub mod scorer;

pub use engine::InferenceEngine;
