//! Evaluation configuration.

/// Minimum link speed most deployments use to filter out modems and serial
/// adapters, in bits per second. Callers opt in explicitly; no default path
/// applies it.
pub const SUGGESTED_MINIMUM_SPEED_BPS: i64 = 10_000_000;

/// Configuration for one availability evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluationConfig {
    /// Minimum link speed in bits per second. Interfaces reporting a lower
    /// speed are skipped. Zero disables speed filtering.
    pub minimum_speed_bps: i64,
}

impl EvaluationConfig {
    /// Create a configuration that skips interfaces slower than
    /// `minimum_speed_bps`.
    pub fn with_minimum_speed(minimum_speed_bps: i64) -> Self {
        Self { minimum_speed_bps }
    }
}

impl Default for EvaluationConfig {
    /// No speed filtering.
    fn default() -> Self {
        Self { minimum_speed_bps: 0 }
    }
}
