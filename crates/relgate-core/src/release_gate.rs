use tracing::debug;

use crate::config::GatePolicy;
use crate::error::Result;
use crate::models::{
    BugCounts, GateInputs, GateStatus, GateVerdict, MetricRow, ScopeCheck,
    SubTaskExecutionCounts,
};

mod decision;
mod remediation;
#[cfg(test)]
mod test_support;
mod validate;

/// Validates `inputs` and evaluates all five gates in order.
///
/// Any malformed input aborts the whole run; there is no partial report.
pub fn evaluate(inputs: &GateInputs, policy: &GatePolicy) -> Result<Vec<GateVerdict>> {
    policy.validate()?;
    validate::validate_inputs(inputs)?;

    let verdicts = vec![
        decision::platform_type_coverage_gate(
            &inputs.platform_type_rows,
            policy,
            inputs.tests_per_hour,
        ),
        decision::platform_coverage_gate(&inputs.platform_rows, policy, inputs.tests_per_hour),
        decision::open_bugs_gate(&inputs.bugs),
        decision::subtask_acceptance_gate(&inputs.subtasks, policy),
        decision::overall_metrics_gate(&inputs.overall, policy, inputs.tests_per_hour),
    ];
    for verdict in &verdicts {
        debug!(
            gate = verdict.gate_id.number(),
            passed = verdict.passed,
            status = verdict.status.as_str(),
            reason = verdict.reason.as_deref().unwrap_or(""),
            "gate evaluated"
        );
    }
    Ok(verdicts)
}

#[must_use]
pub fn release_ready(verdicts: &[GateVerdict]) -> bool {
    verdicts.iter().all(|verdict| verdict.passed)
}

/// Worst verdict status: any hard blocker makes the release NOT_READY.
#[must_use]
pub fn overall_status(verdicts: &[GateVerdict]) -> GateStatus {
    if verdicts
        .iter()
        .any(|verdict| verdict.status == GateStatus::NotReady)
    {
        GateStatus::NotReady
    } else {
        GateStatus::from_passed(release_ready(verdicts))
    }
}

#[must_use]
pub fn unresolved_gates(verdicts: &[GateVerdict]) -> usize {
    verdicts.iter().filter(|verdict| !verdict.passed).count()
}

pub fn platform_type_coverage_gate(
    rows: &[MetricRow],
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    decision::platform_type_coverage_gate(rows, policy, tests_per_hour)
}

pub fn platform_coverage_gate(
    rows: &[MetricRow],
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    decision::platform_coverage_gate(rows, policy, tests_per_hour)
}

pub fn open_bugs_gate(bugs: &BugCounts) -> GateVerdict {
    decision::open_bugs_gate(bugs)
}

pub fn subtask_acceptance_gate(
    counts: &SubTaskExecutionCounts,
    policy: &GatePolicy,
) -> GateVerdict {
    decision::subtask_acceptance_gate(counts, policy)
}

pub fn overall_metrics_gate(
    row: &MetricRow,
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    decision::overall_metrics_gate(row, policy, tests_per_hour)
}

pub fn scope_check(
    row: &MetricRow,
    min_coverage: f64,
    min_pass_ratio: f64,
    tests_per_hour: f64,
) -> ScopeCheck {
    decision::scope_check(row, min_coverage, min_pass_ratio, tests_per_hour)
}
