use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::env::parse_f64;
use super::policy::GatePolicy;
use crate::error::{GateError, Result};

pub const ENV_PLATFORM_TYPE_MIN_COVERAGE: &str = "RELGATE_PLATFORM_TYPE_MIN_COVERAGE";
pub const ENV_PLATFORM_TYPE_MIN_PASS_RATIO: &str = "RELGATE_PLATFORM_TYPE_MIN_PASS_RATIO";
pub const ENV_PLATFORM_MIN_COVERAGE: &str = "RELGATE_PLATFORM_MIN_COVERAGE";
pub const ENV_SUBTASK_GAP_TOLERANCE_PERCENT: &str = "RELGATE_SUBTASK_GAP_TOLERANCE_PERCENT";
pub const ENV_OVERALL_MIN_COVERAGE: &str = "RELGATE_OVERALL_MIN_COVERAGE";
pub const ENV_OVERALL_MIN_PASS_RATIO: &str = "RELGATE_OVERALL_MIN_PASS_RATIO";
pub const ENV_DEFAULT_TESTS_PER_HOUR: &str = "RELGATE_DEFAULT_TESTS_PER_HOUR";

/// Partial policy from a TOML file or the environment. Unset keys keep the
/// value underneath.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PolicyOverrides {
    pub platform_type_min_coverage: Option<f64>,
    pub platform_type_min_pass_ratio: Option<f64>,
    pub platform_min_coverage: Option<f64>,
    pub subtask_gap_tolerance_percent: Option<f64>,
    pub overall_min_coverage: Option<f64>,
    pub overall_min_pass_ratio: Option<f64>,
    pub default_tests_per_hour: Option<f64>,
}

impl PolicyOverrides {
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|err| {
            GateError::InvalidPolicy(format!(
                "failed to read policy file {}: {err}",
                path.display()
            ))
        })?;
        Self::from_toml_str(&raw)
    }

    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads overrides through `lookup`; blank or unparsable values are ignored.
    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| parse_f64(lookup(name).as_deref());
        Self {
            platform_type_min_coverage: read(ENV_PLATFORM_TYPE_MIN_COVERAGE),
            platform_type_min_pass_ratio: read(ENV_PLATFORM_TYPE_MIN_PASS_RATIO),
            platform_min_coverage: read(ENV_PLATFORM_MIN_COVERAGE),
            subtask_gap_tolerance_percent: read(ENV_SUBTASK_GAP_TOLERANCE_PERCENT),
            overall_min_coverage: read(ENV_OVERALL_MIN_COVERAGE),
            overall_min_pass_ratio: read(ENV_OVERALL_MIN_PASS_RATIO),
            default_tests_per_hour: read(ENV_DEFAULT_TESTS_PER_HOUR),
        }
    }

    pub fn apply_to(&self, policy: &mut GatePolicy) {
        fn set(target: &mut f64, value: Option<f64>) {
            if let Some(value) = value {
                *target = value;
            }
        }
        set(
            &mut policy.platform_type_min_coverage,
            self.platform_type_min_coverage,
        );
        set(
            &mut policy.platform_type_min_pass_ratio,
            self.platform_type_min_pass_ratio,
        );
        set(&mut policy.platform_min_coverage, self.platform_min_coverage);
        set(
            &mut policy.subtask_gap_tolerance_percent,
            self.subtask_gap_tolerance_percent,
        );
        set(&mut policy.overall_min_coverage, self.overall_min_coverage);
        set(
            &mut policy.overall_min_pass_ratio,
            self.overall_min_pass_ratio,
        );
        set(
            &mut policy.default_tests_per_hour,
            self.default_tests_per_hour,
        );
    }
}
