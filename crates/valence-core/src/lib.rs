//! # valence-core
//!
//! Foundation crate for the Valence polarity classifier.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::ValenceConfig;
pub use errors::{ValenceError, ValenceResult};
pub use models::counts::{CountsOutcome, PolarityCountSet};
pub use models::document::{CorpusSet, Document};
pub use models::feature::{Edge, Feature};
pub use models::polarity::Polarity;
pub use models::score::{ScoreResult, TieBreak};
