//! Structured, serializable trace of a compensation.
//!
//! Field names are the external JSON contract and stay in Spanish.

use serde::{Deserialize, Serialize};

use mental_core::constants::STRATEGY_NAME;

use crate::adjustment::Direction;
use crate::chooser::{Choice, Operand};
use crate::level::Level;

/// One operand before and after the step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandTrace {
    pub original: i64,
    #[serde(rename = "ajustado")]
    pub adjusted: i64,
    #[serde(rename = "ajuste")]
    pub delta: i64,
}

impl OperandTrace {
    pub fn new(original: i64, delta: i64) -> Self {
        Self {
            original,
            adjusted: original + delta,
            delta,
        }
    }

    pub fn direction(&self) -> Direction {
        Direction::of(self.delta)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transformation {
    #[serde(rename = "operando_principal")]
    pub principal: OperandTrace,
    #[serde(rename = "operando_compensado")]
    pub compensated: OperandTrace,
}

/// A single compensation: the principal operand is rounded, the other
/// absorbs the opposite delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationStep {
    #[serde(rename = "nivel")]
    pub level: Level,
    #[serde(rename = "transformacion")]
    pub transformation: Transformation,
    #[serde(rename = "nueva_operacion")]
    pub new_operation: String,
    #[serde(rename = "comentario")]
    pub comment: String,
}

impl CompensationStep {
    /// Assemble the step for `a + b` from the chooser's decision.
    /// `new_operation` keeps the original operand order.
    pub fn new(level: Level, a: i64, b: i64, choice: &Choice) -> Self {
        let (principal_value, compensated_value) = match choice.principal {
            Operand::A => (a, b),
            Operand::B => (b, a),
        };
        let principal = OperandTrace::new(principal_value, choice.delta);
        let compensated = OperandTrace::new(compensated_value, choice.compensation_delta());

        let (new_a, new_b) = match choice.principal {
            Operand::A => (principal.adjusted, compensated.adjusted),
            Operand::B => (compensated.adjusted, principal.adjusted),
        };

        Self {
            level,
            transformation: Transformation {
                principal,
                compensated,
            },
            new_operation: format_operation(new_a, new_b),
            comment: render_comment(level, &principal, &compensated),
        }
    }
}

/// Full result for `a + b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompensationResult {
    #[serde(rename = "operacion_original")]
    pub original_operation: String,
    #[serde(rename = "operandos")]
    pub operands: [i64; 2],
    #[serde(rename = "estrategia")]
    pub strategy: String,
    /// Zero or one step.
    #[serde(rename = "pasos")]
    pub steps: Vec<CompensationStep>,
    #[serde(rename = "resultado_final")]
    pub final_result: i64,
}

impl CompensationResult {
    /// Result with no transformation: an operand was already aligned.
    pub fn untouched(a: i64, b: i64) -> Self {
        Self {
            original_operation: format_operation(a, b),
            operands: [a, b],
            strategy: STRATEGY_NAME.to_string(),
            steps: Vec::new(),
            final_result: a + b,
        }
    }

    pub fn with_step(a: i64, b: i64, step: CompensationStep) -> Self {
        Self {
            steps: vec![step],
            ..Self::untouched(a, b)
        }
    }

    pub fn is_compensated(&self) -> bool {
        !self.steps.is_empty()
    }

    pub fn step(&self) -> Option<&CompensationStep> {
        self.steps.first()
    }

    /// Pretty-printed JSON document.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

pub(crate) fn format_operation(a: i64, b: i64) -> String {
    format!("{a} + {b}")
}

fn render_comment(level: Level, principal: &OperandTrace, compensated: &OperandTrace) -> String {
    let amount = principal.delta.unsigned_abs();
    let (principal_verb, compensated_verb) = match principal.direction() {
        Direction::Superior => ("sumando", "restando"),
        Direction::Inferior => ("restando", "sumando"),
    };

    format!(
        "Ajustamos {} a la {} {} ({}) {} {} y compensamos {} {} a {}, que queda en {}.",
        principal.original,
        level.label(),
        principal.direction().name(),
        principal.adjusted,
        principal_verb,
        amount,
        compensated_verb,
        amount,
        compensated.original,
        compensated.adjusted,
    )
}
