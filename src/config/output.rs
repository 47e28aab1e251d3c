//! Output configuration module.
//!
//! This module defines how the generated table is wrapped into a source
//! declaration for the firmware build.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Declaration form wrapped around the escaped table string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DeclarationStyle {
    /// `FLASH_STRING(name, "...");` — the Arduino flash-string helper macro.
    FlashString,

    /// `const char name[] PROGMEM = "...";` — a plain program-memory array.
    ProgmemArray,
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Name of the emitted constant.
    pub symbol: String,

    /// Declaration form to wrap the table in.
    pub style: DeclarationStyle,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            symbol: "fsm".to_string(),
            style: DeclarationStyle::FlashString,
        }
    }
}

impl Validate for OutputConfig {
    fn validate(&self) -> ConfigResult<()> {
        // The symbol lands verbatim in generated source; restrict it to a
        // valid C identifier.
        let mut chars = self.symbol.chars();
        let valid_start = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_');
        let valid_rest = chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if !valid_start || !valid_rest {
            return Err(ConfigError::ValidationError(format!(
                "symbol '{}' is not a valid C identifier",
                self.symbol
            )));
        }

        Ok(())
    }
}
