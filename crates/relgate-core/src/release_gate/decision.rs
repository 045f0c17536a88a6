use super::remediation::{remediation, shortfall, tests_needed};
use crate::config::GatePolicy;
use crate::models::{
    BugCounts, GateDetails, GateId, GateStatus, GateVerdict, MetricRow, OpenBugsDetails,
    OverallMetricsDetails, PlatformCheck, PlatformCoverageDetails, PlatformTypeCoverageDetails,
    Remediation, ScopeCheck, SubTaskAcceptanceDetails, SubTaskExecutionCounts, percent,
};

pub(super) fn gate_verdict(
    gate_id: GateId,
    passed: bool,
    status: GateStatus,
    reason: Option<String>,
    remediation: Option<Remediation>,
    details: GateDetails,
) -> GateVerdict {
    GateVerdict {
        gate_id,
        name: gate_id.name().to_string(),
        passed,
        status,
        reason,
        remediation,
        details,
    }
}

pub(super) fn platform_type_coverage_gate(
    rows: &[MetricRow],
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    let min_coverage = policy.platform_type_min_coverage;
    let min_pass_ratio = policy.platform_type_min_pass_ratio;
    let checks = rows
        .iter()
        .map(|row| scope_check(row, min_coverage, min_pass_ratio, tests_per_hour))
        .collect::<Vec<_>>();

    let failing = checks.iter().filter(|check| !check.passed).collect::<Vec<_>>();
    let passed = failing.is_empty();
    let (reason, gate_remediation) = if passed {
        (None, None)
    } else {
        let tests = failing
            .iter()
            .map(|check| check.remediation.tests_needed)
            .sum::<u64>();
        (
            Some(format!(
                "{} platform type/mode combination(s) {}",
                failing.len(),
                threshold_phrase(min_coverage, min_pass_ratio)
            )),
            Some(remediation(tests, tests_per_hour)),
        )
    };

    gate_verdict(
        GateId::PlatformTypeCoverage,
        passed,
        GateStatus::from_passed(passed),
        reason,
        gate_remediation,
        GateDetails::PlatformTypeCoverage(PlatformTypeCoverageDetails {
            min_coverage,
            min_pass_ratio,
            checks,
        }),
    )
}

pub(super) fn platform_coverage_gate(
    rows: &[MetricRow],
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    let min_coverage = policy.platform_min_coverage;
    let checks = rows
        .iter()
        .map(|row| {
            let coverage_percent = row.coverage_percent();
            let gap = shortfall(min_coverage, coverage_percent);
            PlatformCheck {
                row: row.clone(),
                coverage_percent,
                passed: coverage_percent > min_coverage,
                gap,
                tests_needed: tests_needed(gap, row.available_tests),
            }
        })
        .collect::<Vec<_>>();

    let failing = checks.iter().filter(|check| !check.passed).count();
    let passed = failing == 0;
    let (reason, gate_remediation) = if passed {
        (None, None)
    } else {
        let tests = checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| check.tests_needed)
            .sum::<u64>();
        (
            Some(format!(
                "{failing} platform(s) below {min_coverage}% threshold"
            )),
            Some(remediation(tests, tests_per_hour)),
        )
    };

    gate_verdict(
        GateId::PlatformCoverage,
        passed,
        GateStatus::from_passed(passed),
        reason,
        gate_remediation,
        GateDetails::PlatformCoverage(PlatformCoverageDetails {
            min_coverage,
            checks,
        }),
    )
}

pub(super) fn open_bugs_gate(bugs: &BugCounts) -> GateVerdict {
    let passed = bugs.total_open == 0;
    let reason =
        (!passed).then(|| format!("{} open bug(s) need resolution", bugs.total_open));
    gate_verdict(
        GateId::OpenBugs,
        passed,
        GateStatus::from_passed(passed),
        reason,
        None,
        GateDetails::OpenBugs(OpenBugsDetails { bugs: *bugs }),
    )
}

pub(super) fn subtask_acceptance_gate(
    counts: &SubTaskExecutionCounts,
    policy: &GatePolicy,
) -> GateVerdict {
    let tolerance_percent = policy.subtask_gap_tolerance_percent;
    let gap_percentage = percent(counts.outstanding(), counts.total);
    let completed_not_accepted = counts.completed_not_accepted();

    let fully_passed = counts.total > 0 && counts.accepted == counts.total;
    let pending_ok =
        !fully_passed && gap_percentage < tolerance_percent && completed_not_accepted == 0;
    let passed = fully_passed || pending_ok;

    let (status, reason) = if fully_passed {
        (GateStatus::Ready, None)
    } else if pending_ok && counts.total == 0 {
        (
            GateStatus::Ready,
            Some("no sub test executions reported".to_string()),
        )
    } else if pending_ok {
        (
            GateStatus::Ready,
            Some(format!(
                "pending completion: gap {gap_percentage:.1}% below {tolerance_percent}% with no completed items awaiting acceptance"
            )),
        )
    } else if completed_not_accepted > 0 {
        (
            GateStatus::NotReady,
            Some(format!(
                "{completed_not_accepted} execution(s) completed but not accepted"
            )),
        )
    } else {
        (
            GateStatus::Pending,
            Some(format!(
                "gap {gap_percentage:.1}% at or above {tolerance_percent}%"
            )),
        )
    };

    gate_verdict(
        GateId::SubTaskAcceptance,
        passed,
        status,
        reason,
        None,
        GateDetails::SubTaskAcceptance(SubTaskAcceptanceDetails {
            counts: *counts,
            gap_percentage,
            completed_not_accepted,
            fully_passed,
            pending_ok,
            tolerance_percent,
        }),
    )
}

pub(super) fn overall_metrics_gate(
    row: &MetricRow,
    policy: &GatePolicy,
    tests_per_hour: f64,
) -> GateVerdict {
    let min_coverage = policy.overall_min_coverage;
    let min_pass_ratio = policy.overall_min_pass_ratio;
    let check = scope_check(row, min_coverage, min_pass_ratio, tests_per_hour);
    let passed = check.passed;
    let gate_remediation = (!passed).then_some(check.remediation);

    gate_verdict(
        GateId::OverallMetrics,
        passed,
        GateStatus::from_passed(passed),
        check.reason.clone(),
        gate_remediation,
        GateDetails::OverallMetrics(OverallMetricsDetails {
            min_coverage,
            min_pass_ratio,
            check,
        }),
    )
}

pub(super) fn scope_check(
    row: &MetricRow,
    min_coverage: f64,
    min_pass_ratio: f64,
    tests_per_hour: f64,
) -> ScopeCheck {
    let coverage_percent = row.coverage_percent();
    let pass_ratio = row.pass_ratio();
    let coverage_passed = coverage_percent > min_coverage;
    let pass_ratio_passed = pass_ratio > min_pass_ratio;
    let coverage_gap = shortfall(min_coverage, coverage_percent);

    ScopeCheck {
        row: row.clone(),
        coverage_percent,
        pass_ratio,
        coverage_passed,
        pass_ratio_passed,
        passed: coverage_passed && pass_ratio_passed,
        coverage_gap,
        pass_ratio_gap: shortfall(min_pass_ratio, pass_ratio),
        reason: scope_reason(coverage_passed, pass_ratio_passed, min_coverage, min_pass_ratio),
        remediation: remediation(tests_needed(coverage_gap, row.available_tests), tests_per_hour),
    }
}

fn scope_reason(
    coverage_passed: bool,
    pass_ratio_passed: bool,
    min_coverage: f64,
    min_pass_ratio: f64,
) -> Option<String> {
    match (coverage_passed, pass_ratio_passed) {
        (false, false) if min_coverage == min_pass_ratio => {
            Some(format!("Coverage & Pass Ratio below {min_coverage}%"))
        }
        (false, false) => Some(format!(
            "Coverage below {min_coverage}% & Pass Ratio below {min_pass_ratio}%"
        )),
        (false, true) => Some(format!("Coverage below {min_coverage}%")),
        (true, false) => Some(format!("Pass Ratio below {min_pass_ratio}%")),
        (true, true) => None,
    }
}

fn threshold_phrase(min_coverage: f64, min_pass_ratio: f64) -> String {
    if min_coverage == min_pass_ratio {
        format!("below {min_coverage}% threshold")
    } else {
        format!("below {min_coverage}% coverage / {min_pass_ratio}% pass ratio thresholds")
    }
}
