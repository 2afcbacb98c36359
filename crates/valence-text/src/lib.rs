//! # valence-text
//!
//! The text leaf of the workspace: normalization, word and trigram
//! tokenization, typed match patterns, and the acceptability filter.
//! Pure string work; no storage, no async.

pub mod filter;
pub mod normalize;
pub mod pattern;
pub mod tokenize;

pub use filter::{acceptability, is_acceptable};
pub use normalize::normalize;
pub use pattern::MatchPattern;
pub use tokenize::{trigram_windows, word_tokens};
