//! Configuration system.
//! TOML-based, layered resolution: overrides > env > project > user > defaults.

pub mod compensation_config;
pub mod mental_config;

pub use compensation_config::CompensationConfig;
pub use mental_config::{ConfigOverrides, MentalConfig};
