//! Level selection: which rounding granularity to target.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use mental_core::constants::{
    HUNDREDS_SUM_GATE, LEVEL_AUTO, LEVEL_HUNDREDS, LEVEL_TENS, LEVEL_THOUSANDS,
    THOUSANDS_SUM_GATE,
};
use mental_core::errors::CompensationError;

/// A concrete rounding granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Level {
    #[serde(rename = "decena")]
    Tens,
    #[serde(rename = "centena")]
    Hundreds,
    #[serde(rename = "unidad_de_millar")]
    Thousands,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Tens, Level::Hundreds, Level::Thousands];

    /// The positive divisor this level rounds to.
    pub fn divisor(self) -> i64 {
        match self {
            Self::Tens => 10,
            Self::Hundreds => 100,
            Self::Thousands => 1000,
        }
    }

    /// Wire token, as rendered in `nivel`.
    pub fn name(self) -> &'static str {
        match self {
            Self::Tens => LEVEL_TENS,
            Self::Hundreds => LEVEL_HUNDREDS,
            Self::Thousands => LEVEL_THOUSANDS,
        }
    }

    /// Phrase used in explanatory text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Tens => "decena",
            Self::Hundreds => "centena",
            Self::Thousands => "unidad de millar",
        }
    }

    pub fn from_divisor(divisor: i64) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.divisor() == divisor)
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Level {
    type Err = CompensationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.name() == s)
            .ok_or_else(|| CompensationError::invalid_level(s))
    }
}

/// What the caller asked for: a fixed level or automatic selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LevelRequest {
    #[default]
    Auto,
    Explicit(Level),
}

impl LevelRequest {
    pub fn name(self) -> &'static str {
        match self {
            Self::Auto => LEVEL_AUTO,
            Self::Explicit(level) => level.name(),
        }
    }
}

impl fmt::Display for LevelRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LevelRequest {
    type Err = CompensationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == LEVEL_AUTO {
            return Ok(Self::Auto);
        }
        s.parse().map(Self::Explicit)
    }
}

impl From<Level> for LevelRequest {
    fn from(level: Level) -> Self {
        Self::Explicit(level)
    }
}

/// Resolve a request to a concrete level.
///
/// Explicit requests map directly. `Auto` tries the coarsest tier first:
/// a tier is targeted only when one operand is already aligned one tier
/// down and the sum reaches the tier's gate; tens always applies.
pub fn select_level(a: u32, b: u32, request: LevelRequest) -> Level {
    match request {
        LevelRequest::Explicit(level) => level,
        LevelRequest::Auto => {
            let sum = i64::from(a) + i64::from(b);
            let aligned_to = |d: u32| a % d == 0 || b % d == 0;

            if aligned_to(100) && sum >= THOUSANDS_SUM_GATE {
                Level::Thousands
            } else if aligned_to(10) && sum >= HUNDREDS_SUM_GATE {
                Level::Hundreds
            } else {
                Level::Tens
            }
        }
    }
}

/// String-level contract: parse `level_request`, then resolve its divisor.
pub fn select_divisor(a: u32, b: u32, level_request: &str) -> Result<i64, CompensationError> {
    let request: LevelRequest = level_request.parse()?;
    Ok(select_level(a, b, request).divisor())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_names_map_to_divisors() {
        assert_eq!(select_divisor(1, 2, "decena").unwrap(), 10);
        assert_eq!(select_divisor(1, 2, "centena").unwrap(), 100);
        assert_eq!(select_divisor(1, 2, "unidad_de_millar").unwrap(), 1000);
    }

    #[test]
    fn unknown_name_is_invalid_level() {
        let err = select_divisor(1, 2, "millar").unwrap_err();
        assert_eq!(err, CompensationError::invalid_level("millar"));
        assert!("Decena".parse::<LevelRequest>().is_err());
        assert!("".parse::<LevelRequest>().is_err());
    }

    #[test]
    fn auto_targets_thousands_when_gated() {
        assert_eq!(select_level(1900, 1442, LevelRequest::Auto), Level::Thousands);
        // Aligned to hundreds but the sum is too small.
        assert_eq!(select_level(300, 450, LevelRequest::Auto), Level::Hundreds);
    }

    #[test]
    fn auto_targets_hundreds_when_gated() {
        assert_eq!(select_level(70, 83, LevelRequest::Auto), Level::Hundreds);
        assert_eq!(select_level(199, 220, LevelRequest::Auto), Level::Hundreds);
        // Aligned to tens but the sum is below 100.
        assert_eq!(select_level(30, 17, LevelRequest::Auto), Level::Tens);
    }

    #[test]
    fn auto_falls_back_to_tens() {
        assert_eq!(select_level(79, 25, LevelRequest::Auto), Level::Tens);
        assert_eq!(select_level(1887, 1455, LevelRequest::Auto), Level::Tens);
    }

    #[test]
    fn sum_gates_are_inclusive() {
        assert_eq!(select_level(900, 100, LevelRequest::Auto), Level::Thousands);
        assert_eq!(select_level(90, 10, LevelRequest::Auto), Level::Hundreds);
        assert_eq!(select_level(90, 9, LevelRequest::Auto), Level::Tens);
    }

    #[test]
    fn level_tokens_round_trip_through_from_str() {
        for level in Level::ALL {
            assert_eq!(level.name().parse::<Level>().unwrap(), level);
            assert_eq!(Level::from_divisor(level.divisor()), Some(level));
        }
        assert_eq!(Level::from_divisor(7), None);
        assert_eq!("auto".parse::<LevelRequest>().unwrap(), LevelRequest::Auto);
    }
}
