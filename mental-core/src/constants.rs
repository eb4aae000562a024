//! Shared constants for the mental arithmetic engines.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Strategy identifier rendered in every compensation result.
pub const STRATEGY_NAME: &str = "compensacion_base10";

/// Token requesting automatic level selection.
pub const LEVEL_AUTO: &str = "auto";

/// Token for the tens granularity.
pub const LEVEL_TENS: &str = "decena";

/// Token for the hundreds granularity.
pub const LEVEL_HUNDREDS: &str = "centena";

/// Token for the thousands granularity.
pub const LEVEL_THOUSANDS: &str = "unidad_de_millar";

/// Every level token accepted from callers, in display order.
pub const VALID_LEVELS: [&str; 4] = [LEVEL_AUTO, LEVEL_TENS, LEVEL_HUNDREDS, LEVEL_THOUSANDS];

/// Default level when neither the caller nor config names one.
pub const DEFAULT_LEVEL: &str = LEVEL_AUTO;

// ---- Selection policy ----

/// Minimum sum for automatic selection to target thousands.
pub const THOUSANDS_SUM_GATE: i64 = 1000;

/// Minimum sum for automatic selection to target hundreds.
pub const HUNDREDS_SUM_GATE: i64 = 100;

/// Weight multiplier applied to adjustments that are multiples of ten.
pub const MULTIPLE_OF_TEN_DISCOUNT: f64 = 0.5;

// ---- Environment ----

/// Env var holding the tracing filter directive.
pub const LOG_ENV_VAR: &str = "MENTAL_LOG";

/// Env var overriding `compensation.default_level`.
pub const ENV_DEFAULT_LEVEL: &str = "MENTAL_COMPENSATION_DEFAULT_LEVEL";

/// Project config file name.
pub const PROJECT_CONFIG_FILE: &str = "mental.toml";
