use serde::{Deserialize, Serialize};

use crate::error::{GateError, Result};

pub const DEFAULT_PLATFORM_TYPE_MIN_COVERAGE: f64 = 90.0;
pub const DEFAULT_PLATFORM_TYPE_MIN_PASS_RATIO: f64 = 90.0;
pub const DEFAULT_PLATFORM_MIN_COVERAGE: f64 = 50.0;
pub const DEFAULT_SUBTASK_GAP_TOLERANCE_PERCENT: f64 = 5.0;
pub const DEFAULT_OVERALL_MIN_COVERAGE: f64 = 90.0;
pub const DEFAULT_OVERALL_MIN_PASS_RATIO: f64 = 90.0;
pub const DEFAULT_TESTS_PER_HOUR: f64 = 100.0;

/// Release-policy thresholds. Percentages are compared strictly: a metric
/// must be above its minimum to pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GatePolicy {
    pub platform_type_min_coverage: f64,
    pub platform_type_min_pass_ratio: f64,
    pub platform_min_coverage: f64,
    pub subtask_gap_tolerance_percent: f64,
    pub overall_min_coverage: f64,
    pub overall_min_pass_ratio: f64,
    /// Execution rate used when the snapshot carries no measured rate.
    pub default_tests_per_hour: f64,
}

impl Default for GatePolicy {
    fn default() -> Self {
        Self {
            platform_type_min_coverage: DEFAULT_PLATFORM_TYPE_MIN_COVERAGE,
            platform_type_min_pass_ratio: DEFAULT_PLATFORM_TYPE_MIN_PASS_RATIO,
            platform_min_coverage: DEFAULT_PLATFORM_MIN_COVERAGE,
            subtask_gap_tolerance_percent: DEFAULT_SUBTASK_GAP_TOLERANCE_PERCENT,
            overall_min_coverage: DEFAULT_OVERALL_MIN_COVERAGE,
            overall_min_pass_ratio: DEFAULT_OVERALL_MIN_PASS_RATIO,
            default_tests_per_hour: DEFAULT_TESTS_PER_HOUR,
        }
    }
}

impl GatePolicy {
    pub fn validate(&self) -> Result<()> {
        let percentages = [
            ("platform_type_min_coverage", self.platform_type_min_coverage),
            (
                "platform_type_min_pass_ratio",
                self.platform_type_min_pass_ratio,
            ),
            ("platform_min_coverage", self.platform_min_coverage),
            (
                "subtask_gap_tolerance_percent",
                self.subtask_gap_tolerance_percent,
            ),
            ("overall_min_coverage", self.overall_min_coverage),
            ("overall_min_pass_ratio", self.overall_min_pass_ratio),
        ];
        for (name, value) in percentages {
            validate_percentage(name, value)?;
        }
        if !self.default_tests_per_hour.is_finite() || self.default_tests_per_hour < 0.0 {
            return Err(GateError::InvalidPolicy(format!(
                "default_tests_per_hour must be finite and >= 0, got {}",
                self.default_tests_per_hour
            )));
        }
        Ok(())
    }
}

fn validate_percentage(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || !(0.0..=100.0).contains(&value) {
        return Err(GateError::InvalidPolicy(format!(
            "{name} must be within [0, 100], got {value}"
        )));
    }
    Ok(())
}
