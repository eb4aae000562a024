//! # mental-compensation
//!
//! Base-10 compensation strategy for mental addition.
//! One addend is nudged to a round number (tens, hundreds, or thousands)
//! and the other absorbs the inverse adjustment, so the sum is unchanged.
//!
//! Pipeline: level selection, adjustment evaluation for both operands,
//! difficulty-weighted choice of the principal operand, trace assembly.

pub mod adjustment;
pub mod chooser;
pub mod engine;
pub mod level;
pub mod presets;
pub mod trace;

pub use adjustment::{Adjustment, Direction};
pub use chooser::{Choice, Operand};
pub use engine::{compute_compensation, CompensationEngine};
pub use level::{Level, LevelRequest};
pub use mental_core::errors::CompensationError;
pub use presets::{Preset, PresetCatalog};
pub use trace::{CompensationResult, CompensationStep, OperandTrace, Transformation};
