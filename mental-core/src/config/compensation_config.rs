//! Compensation strategy configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_LEVEL;

/// Configuration for the compensation engine.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct CompensationConfig {
    /// Level used when a caller does not pass one. Default: "auto".
    pub default_level: Option<String>,
}

impl CompensationConfig {
    /// Returns the effective default level, defaulting to "auto".
    pub fn effective_default_level(&self) -> &str {
        self.default_level.as_deref().unwrap_or(DEFAULT_LEVEL)
    }
}
