use crate::error::{GateError, Result};
use crate::models::{BugCounts, GateInputs, MetricRow, SubTaskExecutionCounts};

pub(super) fn validate_inputs(inputs: &GateInputs) -> Result<()> {
    for (index, row) in inputs.platform_type_rows.iter().enumerate() {
        validate_metric_row(&format!("platform_type_rows[{index}]"), row)?;
    }
    for (index, row) in inputs.platform_rows.iter().enumerate() {
        validate_metric_row(&format!("platform_rows[{index}]"), row)?;
    }
    validate_metric_row("overall", &inputs.overall)?;
    validate_bug_counts(&inputs.bugs)?;
    validate_subtask_counts(&inputs.subtasks)?;
    if inputs.tests_per_hour.is_nan() || inputs.tests_per_hour.is_infinite() {
        return Err(GateError::validation(format!(
            "tests_per_hour must be finite, got {}",
            inputs.tests_per_hour
        )));
    }
    Ok(())
}

pub(super) fn validate_metric_row(field: &str, row: &MetricRow) -> Result<()> {
    if row.scope.trim().is_empty() {
        return Err(GateError::validation(format!("{field}.scope is empty")));
    }
    if row.mode.as_deref().is_some_and(|mode| mode.trim().is_empty()) {
        return Err(GateError::validation(format!(
            "{field}.mode is present but empty"
        )));
    }
    let denominator = row.pass_ratio_denominator();
    if row.total_executions.is_some_and(|total| total < row.tests_executed) {
        return Err(GateError::validation(format!(
            "{field}.total_executions ({denominator}) is below tests_executed ({})",
            row.tests_executed
        )));
    }
    // Passed and failed are distinct-test counts taken per outcome, so one test
    // can land in both when platforms within a scope disagree. Only each count
    // on its own is bounded.
    for (name, count) in [
        ("tests_passed", row.tests_passed),
        ("tests_failed", row.tests_failed),
    ] {
        if count > denominator {
            return Err(GateError::validation(format!(
                "{field}.{name} ({count}) exceeds {denominator} executed"
            )));
        }
    }
    Ok(())
}

pub(super) fn validate_bug_counts(bugs: &BugCounts) -> Result<()> {
    if bugs.on_dev > bugs.total_open || bugs.on_qa > bugs.total_open {
        return Err(GateError::validation(format!(
            "bugs: on_dev ({}) and on_qa ({}) must not exceed total_open ({})",
            bugs.on_dev, bugs.on_qa, bugs.total_open
        )));
    }
    Ok(())
}

pub(super) fn validate_subtask_counts(counts: &SubTaskExecutionCounts) -> Result<()> {
    if counts.accepted > counts.completed {
        return Err(GateError::validation(format!(
            "subtasks.accepted ({}) exceeds subtasks.completed ({})",
            counts.accepted, counts.completed
        )));
    }
    if counts.completed > counts.total {
        return Err(GateError::validation(format!(
            "subtasks.completed ({}) exceeds subtasks.total ({})",
            counts.completed, counts.total
        )));
    }
    let partitioned = counts
        .completed
        .saturating_add(counts.in_progress)
        .saturating_add(counts.not_started);
    if partitioned != counts.total {
        return Err(GateError::validation(format!(
            "subtasks: completed + in_progress + not_started ({partitioned}) must equal total ({})",
            counts.total
        )));
    }
    Ok(())
}
