//! Tests for the error handling system.

use mental_core::errors::error_code::{self, MentalErrorCode};
use mental_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let level = CompensationError::invalid_level("semana");
    assert_eq!(level.error_code(), error_code::INVALID_LEVEL);

    let config = ConfigError::FileNotFound {
        path: "/tmp/mental.toml".into(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);
}

#[test]
fn test_invalid_level_message_lists_accepted_tokens() {
    let err = CompensationError::invalid_level("invalido");
    let msg = err.to_string();
    assert!(msg.contains("'invalido'"), "message was: {msg}");
    for token in ["auto", "decena", "centena", "unidad_de_millar"] {
        assert!(msg.contains(token), "missing {token} in: {msg}");
    }
}

#[test]
fn test_coded_message_format() {
    let err = CompensationError::invalid_level("x");
    let coded = err.coded_message();
    assert!(coded.starts_with("[INVALID_LEVEL] "), "got: {coded}");

    let cfg = ConfigError::ValidationFailed {
        field: "compensation.default_level".into(),
        message: "bad".into(),
    };
    assert_eq!(
        cfg.coded_message(),
        "[CONFIG_ERROR] Config validation failed for compensation.default_level: bad"
    );
}

#[test]
fn test_errors_are_std_errors() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}
    assert_error::<CompensationError>();
    assert_error::<ConfigError>();
}
