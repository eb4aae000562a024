//! Signed distance from an operand to the nearer multiple of a divisor.

use serde::{Deserialize, Serialize};

/// Rounding direction implied by an adjustment's sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Superior,
    Inferior,
}

impl Direction {
    /// Positive deltas round up; zero and negative deltas count as down.
    pub fn of(delta: i64) -> Self {
        if delta > 0 {
            Self::Superior
        } else {
            Self::Inferior
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Superior => "superior",
            Self::Inferior => "inferior",
        }
    }
}

/// Candidate adjustment for one operand at one divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Adjustment {
    pub value: i64,
    pub divisor: i64,
    /// `0` means the operand is already aligned; otherwise `0 < |delta| < divisor`.
    pub delta: i64,
}

impl Adjustment {
    pub fn new(value: i64, divisor: i64) -> Self {
        Self {
            value,
            divisor,
            delta: evaluate(value, divisor),
        }
    }

    pub fn is_aligned(&self) -> bool {
        self.delta == 0
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.delta)
    }

    /// The multiple of `divisor` this adjustment lands on.
    pub fn target(&self) -> i64 {
        self.value + self.delta
    }
}

/// Signed distance from `value` to the nearer multiple of `divisor`.
///
/// Returns `0` when `value` is already a multiple. Rounds down only when
/// the multiple below is strictly closer, so exact ties round up.
pub fn evaluate(value: i64, divisor: i64) -> i64 {
    debug_assert!(divisor > 0, "divisor must be positive, got {divisor}");

    let remainder = value.rem_euclid(divisor);
    if remainder == 0 {
        return 0;
    }

    let above = divisor - remainder;
    if remainder < above {
        -remainder
    } else {
        above
    }
}
