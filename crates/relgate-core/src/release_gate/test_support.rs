use crate::models::{
    BugCounts, GateDetails, GateInputs, GateVerdict, MetricRow, ScopeCheck, SubTaskExecutionCounts,
};

pub(super) fn row(
    scope: &str,
    mode: Option<&str>,
    executed: u64,
    available: u64,
    passed: u64,
) -> MetricRow {
    MetricRow::new(scope, mode, executed, available, passed, executed - passed)
}

pub(super) fn subtasks(total: u64, accepted: u64, completed: u64) -> SubTaskExecutionCounts {
    SubTaskExecutionCounts {
        total,
        accepted,
        completed,
        in_progress: total - completed,
        not_started: 0,
    }
}

pub(super) fn passing_inputs() -> GateInputs {
    GateInputs {
        platform_type_rows: vec![
            row("FPGA", Some("Transparent"), 950, 1000, 930),
            row("FPGA", Some("Routing"), 920, 1000, 900),
            row("Software", Some("Transparent"), 960, 1000, 950),
        ],
        platform_rows: vec![
            row("UHT", None, 700, 1000, 690),
            row("KVM", None, 650, 1000, 640),
        ],
        overall: row("overall", None, 950, 1000, 940),
        bugs: BugCounts::default(),
        subtasks: subtasks(10, 10, 10),
        tests_per_hour: 100.0,
    }
}

pub(super) fn scope_checks(verdict: &GateVerdict) -> &[ScopeCheck] {
    match &verdict.details {
        GateDetails::PlatformTypeCoverage(details) => &details.checks,
        other => panic!("expected platform_type_coverage details, got {other:?}"),
    }
}
