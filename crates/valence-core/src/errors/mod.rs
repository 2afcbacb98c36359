//! Error types, split per subsystem, plus the workspace-wide aggregate.

pub mod harvest_error;
pub mod inference_error;
pub mod storage_error;

pub use harvest_error::HarvestError;
pub use inference_error::{InferenceError, RejectReason};
pub use storage_error::StorageError;

/// The aggregate error every crate boundary speaks.
#[derive(Debug, thiserror::Error)]
pub enum ValenceError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Inference(#[from] InferenceError),

    #[error(transparent)]
    Harvest(#[from] HarvestError),

    #[error("config error: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ValenceResult<T> = Result<T, ValenceError>;
