use mental_core::config::MentalConfig;
use mental_core::errors::CompensationError;
use tracing::{debug, instrument, warn};

use crate::adjustment::Adjustment;
use crate::chooser;
use crate::level::{self, LevelRequest};
use crate::trace::{CompensationResult, CompensationStep};

/// Compensation engine for `a + b`.
///
/// Stateless apart from the level used when callers pass none, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CompensationEngine {
    default_level: LevelRequest,
}

impl CompensationEngine {
    /// Engine defaulting to automatic level selection.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_default_level(default_level: LevelRequest) -> Self {
        Self { default_level }
    }

    /// Build from resolved configuration.
    pub fn from_config(config: &MentalConfig) -> Result<Self, CompensationError> {
        let default_level = config.compensation.effective_default_level().parse()?;
        Ok(Self::with_default_level(default_level))
    }

    pub fn default_level(&self) -> LevelRequest {
        self.default_level
    }

    /// Compute the compensation trace for `a + b`.
    ///
    /// Produces zero steps when either operand is already a multiple of the
    /// resolved divisor, otherwise exactly one. `final_result` is always `a + b`.
    ///
    /// Operands are `u32` and all arithmetic runs in `i64`, so sums and
    /// adjusted values (at most `u32::MAX + 999`, at least `-999`) never overflow.
    #[instrument(level = "debug", skip(self))]
    pub fn compute(&self, a: u32, b: u32, request: Option<LevelRequest>) -> CompensationResult {
        let request = request.unwrap_or(self.default_level);
        let level = level::select_level(a, b, request);
        let (a, b) = (i64::from(a), i64::from(b));
        let divisor = level.divisor();
        debug!(%level, divisor, "level resolved");

        let adjustment_a = Adjustment::new(a, divisor);
        let adjustment_b = Adjustment::new(b, divisor);
        if adjustment_a.is_aligned() || adjustment_b.is_aligned() {
            debug!("operand already aligned, no compensation needed");
            return CompensationResult::untouched(a, b);
        }

        let choice = chooser::choose(&adjustment_a, &adjustment_b);
        debug!(principal = ?choice.principal, delta = choice.delta, "principal operand chosen");

        CompensationResult::with_step(a, b, CompensationStep::new(level, a, b, &choice))
    }

    /// Like [`compute`](Self::compute), with the level given as a wire token.
    /// The token is validated before any arithmetic.
    pub fn compute_with_level(
        &self,
        a: u32,
        b: u32,
        level: &str,
    ) -> Result<CompensationResult, CompensationError> {
        let request = level.parse::<LevelRequest>().map_err(|err| {
            warn!(requested = level, "rejecting unknown level");
            err
        })?;
        Ok(self.compute(a, b, Some(request)))
    }
}

/// Compute the compensation for `a + b` at `level`
/// (`auto`, `decena`, `centena`, or `unidad_de_millar`).
pub fn compute_compensation(
    a: u32,
    b: u32,
    level: &str,
) -> Result<CompensationResult, CompensationError> {
    CompensationEngine::new().compute_with_level(a, b, level)
}
