//! MentalErrorCode trait for boundary conversion.

/// Trait for converting errors to stable machine-readable codes.
/// Every error enum implements this so that a serving layer can map
/// failures without matching on message text.
pub trait MentalErrorCode {
    /// Returns the error code string (e.g., "INVALID_LEVEL").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted boundary string: `[ERROR_CODE] message`.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_LEVEL: &str = "INVALID_LEVEL";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
