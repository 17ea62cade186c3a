//! Simulator configuration.
//!
//! Small and flat: the core itself has no parameters, so configuration only
//! covers the reference harness. Supplied as JSON or via `Config::default()`.

use serde::Deserialize;

use crate::common::CoreError;

/// Default configuration constants.
mod defaults {
    /// Address the fetch unit starts at after reset.
    pub const RESET_PC: u32 = 0;

    /// Cycle budget for `Simulator::run` when the caller gives none.
    pub const MAX_CYCLES: u64 = 1_000_000;
}

/// Harness configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Address the fetch unit starts at after reset.
    pub reset_pc: u32,
    /// Upper bound on simulated cycles before `run` gives up.
    pub max_cycles: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            reset_pc: defaults::RESET_PC,
            max_cycles: defaults::MAX_CYCLES,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] when the document does not parse
    /// or names unknown fields.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        serde_json::from_str(json).map_err(|e| CoreError::InvalidConfig(e.to_string()))
    }
}
