//! Precomputed showcase scenarios for the compensation strategy.

use serde::{Deserialize, Serialize};

use crate::engine::CompensationEngine;
use crate::trace::{format_operation, CompensationResult};

/// Named scenarios, each exercising a distinct branch of the engine.
pub const PRESET_OPERATIONS: [(&str, u32, u32); 5] = [
    ("Decena superior", 79, 25),
    ("Decena inferior", 21, 26),
    ("Prioridad múltiplo de 10", 70, 83),
    ("Ajuste pequeño gana", 199, 220),
    ("Sin compensación necesaria", 30, 17),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preset {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "operacion")]
    pub operation: String,
    #[serde(rename = "resultado")]
    pub result: CompensationResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetCatalog {
    pub total: usize,
    #[serde(rename = "ejemplos")]
    pub presets: Vec<Preset>,
}

/// Compute every preset with `engine`'s default level.
pub fn catalog(engine: &CompensationEngine) -> PresetCatalog {
    let presets: Vec<Preset> = PRESET_OPERATIONS
        .iter()
        .map(|&(name, a, b)| Preset {
            name: name.to_string(),
            operation: format_operation(i64::from(a), i64::from(b)),
            result: engine.compute(a, b, None),
        })
        .collect();

    PresetCatalog {
        total: presets.len(),
        presets,
    }
}

impl Default for PresetCatalog {
    fn default() -> Self {
        catalog(&CompensationEngine::new())
    }
}
