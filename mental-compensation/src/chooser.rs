//! Difficulty-weighted choice of the principal operand.

use mental_core::constants::MULTIPLE_OF_TEN_DISCOUNT;

use crate::adjustment::Adjustment;

/// Which input operand a choice refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operand {
    A,
    B,
}

impl Operand {
    pub fn other(self) -> Self {
        match self {
            Self::A => Self::B,
            Self::B => Self::A,
        }
    }
}

/// The operand to round and the delta applied to it.
/// The other operand receives `-delta`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Choice {
    pub principal: Operand,
    pub delta: i64,
}

impl Choice {
    pub fn compensated(&self) -> Operand {
        self.principal.other()
    }

    pub fn compensation_delta(&self) -> i64 {
        -self.delta
    }
}

/// Cognitive cost of shifting an operand by `delta`.
///
/// Shifts that are themselves multiples of ten are discounted, so `+30`
/// (weight 15) beats `+17` (weight 17).
pub fn weight(delta: i64) -> f64 {
    let magnitude = delta.unsigned_abs() as f64;
    if delta != 0 && delta % 10 == 0 {
        magnitude * MULTIPLE_OF_TEN_DISCOUNT
    } else {
        magnitude
    }
}

/// Pick the principal operand: the lighter adjustment wins, ties go to `a`.
///
/// Both adjustments must be unaligned; aligned operands short-circuit
/// before this point.
pub fn choose(a: &Adjustment, b: &Adjustment) -> Choice {
    debug_assert!(!a.is_aligned() && !b.is_aligned());

    let (weight_a, weight_b) = (weight(a.delta), weight(b.delta));
    tracing::debug!(
        delta_a = a.delta,
        delta_b = b.delta,
        weight_a,
        weight_b,
        "weighing candidate adjustments"
    );

    if weight_a <= weight_b {
        Choice {
            principal: Operand::A,
            delta: a.delta,
        }
    } else {
        Choice {
            principal: Operand::B,
            delta: b.delta,
        }
    }
}
