use serde::{Deserialize, Serialize};

/// One aggregated (scope, mode) observation supplied by the metrics provider.
///
/// `scope` is a platform-type name, a platform name or `"overall"`. Counts are
/// distinct tests except `total_executions`, which is the pass-ratio
/// denominator when the provider counts executions per platform rather than
/// distinct tests (the overall row does this).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricRow {
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub tests_executed: u64,
    pub available_tests: u64,
    pub tests_passed: u64,
    pub tests_failed: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_executions: Option<u64>,
}

impl MetricRow {
    pub fn new(
        scope: impl Into<String>,
        mode: Option<&str>,
        tests_executed: u64,
        available_tests: u64,
        tests_passed: u64,
        tests_failed: u64,
    ) -> Self {
        Self {
            scope: scope.into(),
            mode: mode.map(ToString::to_string),
            tests_executed,
            available_tests,
            tests_passed,
            tests_failed,
            total_executions: None,
        }
    }

    #[must_use]
    pub fn with_total_executions(mut self, total_executions: u64) -> Self {
        self.total_executions = Some(total_executions);
        self
    }

    /// Executed share of available tests. Zero when nothing is available.
    #[must_use]
    pub fn coverage_percent(&self) -> f64 {
        percent(self.tests_executed, self.available_tests)
    }

    /// Passed share of executed tests. Zero when nothing was executed.
    #[must_use]
    pub fn pass_ratio(&self) -> f64 {
        percent(self.tests_passed, self.pass_ratio_denominator())
    }

    #[must_use]
    pub fn pass_ratio_denominator(&self) -> u64 {
        self.total_executions.unwrap_or(self.tests_executed)
    }

    #[must_use]
    pub fn label(&self) -> String {
        match self.mode.as_deref() {
            Some(mode) => format!("{} {mode}", self.scope),
            None => self.scope.clone(),
        }
    }
}

#[must_use]
pub(crate) fn percent(numerator: u64, denominator: u64) -> f64 {
    if denominator == 0 {
        return 0.0;
    }
    numerator as f64 * 100.0 / denominator as f64
}
