//! SQL query modules, one per concern.

pub mod corpus_counts;
pub mod corpus_crud;
