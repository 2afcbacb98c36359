//! # valence-harvest
//!
//! Plumbing between the remote search API and the corpus: a paginating
//! search client, raw/pool file pairs on disk, and ingestion of pool files
//! into the training and working partitions.

pub mod client;
pub mod ingest;
pub mod pool_files;

pub use client::{Harvester, SearchClient};
pub use ingest::{ingest_dir, IngestReport};
