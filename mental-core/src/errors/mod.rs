//! Error handling for the mental arithmetic engines.
//! One error enum per subsystem, `thiserror` only.

pub mod compensation_error;
pub mod config_error;
pub mod error_code;

pub use compensation_error::CompensationError;
pub use config_error::ConfigError;
pub use error_code::MentalErrorCode;
