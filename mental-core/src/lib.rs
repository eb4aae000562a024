//! # mental-core
//!
//! Shared infrastructure for the mental arithmetic strategies:
//! error enums with stable codes, layered TOML configuration,
//! tracing setup, and constants.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::MentalConfig;
pub use errors::{CompensationError, ConfigError, MentalErrorCode};
