//! TOML-backed configuration. Every section deserializes with defaults so a
//! partial (or absent) config file is always usable.

pub mod defaults;

mod filter_config;
mod harvest_config;
mod inference_config;
mod storage_config;
mod tokenizer_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ValenceError, ValenceResult};

pub use filter_config::FilterConfig;
pub use harvest_config::HarvestConfig;
pub use inference_config::InferenceConfig;
pub use storage_config::StorageConfig;
pub use tokenizer_config::TokenizerConfig;

/// Top-level configuration, one section per subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValenceConfig {
    pub storage: StorageConfig,
    pub tokenizer: TokenizerConfig,
    pub filter: FilterConfig,
    pub inference: InferenceConfig,
    pub harvest: HarvestConfig,
}

impl ValenceConfig {
    /// Load from a TOML file. A missing file yields the defaults.
    pub fn load(path: &Path) -> ValenceResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ValenceError::Config(e.to_string()))
    }
}
