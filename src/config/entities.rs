//! Entity selection configuration module.
//!
//! This module controls which entries end up in the generated table: the
//! built-in catalogs can be toggled and extra sequence/code pairs can be
//! supplied from the configuration file.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Entity selection configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitiesConfig {
    /// Include the predefined XML character entities.
    pub xml_builtin: bool,

    /// Include the Latin-1 accented-letter sequences.
    pub latin1_accents: bool,

    /// Additional entries merged on top of the built-in catalogs. An extra
    /// entry whose sequence collides with a built-in replaces it.
    pub extra: Vec<ExtraEntity>,
}

impl Default for EntitiesConfig {
    fn default() -> Self {
        Self {
            xml_builtin: true,
            latin1_accents: true,
            extra: Vec::new(),
        }
    }
}

impl Validate for EntitiesConfig {
    fn validate(&self) -> ConfigResult<()> {
        for entry in &self.extra {
            entry.validate()?;
        }
        Ok(())
    }
}

/// A user-supplied table entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraEntity {
    /// The input sequence to match, keyed on its UTF-8 bytes.
    pub sequence: String,

    /// The substitution code emitted on a match, 1..=255.
    pub code: u8,
}

impl Validate for ExtraEntity {
    fn validate(&self) -> ConfigResult<()> {
        if self.sequence.is_empty() {
            return Err(ConfigError::ValidationError(
                "extra entity sequence must not be empty".to_string(),
            ));
        }

        // 0 marks "no match" in the table's code cells and cannot be used
        // as a real substitution code.
        if self.code == 0 {
            return Err(ConfigError::ValidationError(format!(
                "extra entity '{}' uses reserved code 0",
                self.sequence
            )));
        }

        Ok(())
    }
}
