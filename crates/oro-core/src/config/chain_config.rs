use serde::{Deserialize, Serialize};

use super::defaults;
use super::oro_config::invalid;
use crate::errors::ConfigError;

/// Supersession chain traversal configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Upper bound on chain members collected during a walk. Exceeding it
    /// fails the build instead of looping on corrupt links.
    pub max_chain_length: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            max_chain_length: defaults::DEFAULT_MAX_CHAIN_LENGTH,
        }
    }
}

impl ChainConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_chain_length == 0 {
            return Err(invalid("chain.max_chain_length", "must be greater than 0"));
        }
        Ok(())
    }
}
