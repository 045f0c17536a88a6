use crate::models::Remediation;

/// Percentage points still missing to reach `threshold`; never negative.
#[must_use]
pub(super) fn shortfall(threshold: f64, actual: f64) -> f64 {
    (threshold - actual).max(0.0)
}

/// Tests to execute to close a coverage gap, rounded down.
#[must_use]
pub(super) fn tests_needed(gap_percent: f64, available_tests: u64) -> u64 {
    let raw = gap_percent / 100.0 * available_tests as f64;
    if raw.is_finite() && raw > 0.0 {
        raw.floor() as u64
    } else {
        0
    }
}

#[must_use]
pub(super) fn hours_needed(tests_needed: u64, tests_per_hour: f64) -> f64 {
    if tests_per_hour > 0.0 {
        tests_needed as f64 / tests_per_hour
    } else {
        0.0
    }
}

#[must_use]
pub(super) fn remediation(tests_needed: u64, tests_per_hour: f64) -> Remediation {
    Remediation {
        tests_needed,
        hours_needed: hours_needed(tests_needed, tests_per_hour),
    }
}
