//! Match-table configuration module.
//!
//! This module defines the knobs of the trie builder and serializer.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Match-table configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Maximum entity sequence length accepted by the builder. Bounds the
    /// trie depth and therefore the serializer's recursion depth.
    pub max_depth: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self { max_depth: 64 }
    }
}

impl Validate for TableConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_depth == 0 {
            return Err(ConfigError::ValidationError(
                "max_depth must be greater than 0".to_string(),
            ));
        }

        if self.max_depth > 1024 {
            return Err(ConfigError::ValidationError(
                "max_depth must not exceed 1024".to_string(),
            ));
        }

        Ok(())
    }
}
