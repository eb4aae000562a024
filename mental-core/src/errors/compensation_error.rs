//! Compensation engine errors.

use super::error_code::{self, MentalErrorCode};
use crate::constants::VALID_LEVELS;

/// Errors raised by the compensation engine.
///
/// Numeric paths are total over the engine's input domain, so the only
/// failure is a level token nobody recognizes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CompensationError {
    #[error(
        "Invalid level '{level}': expected one of {expected}",
        expected = VALID_LEVELS.join(", ")
    )]
    InvalidLevel { level: String },
}

impl CompensationError {
    pub fn invalid_level(level: impl Into<String>) -> Self {
        Self::InvalidLevel {
            level: level.into(),
        }
    }
}

impl MentalErrorCode for CompensationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLevel { .. } => error_code::INVALID_LEVEL,
        }
    }
}
