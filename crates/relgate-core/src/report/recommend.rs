use crate::models::{GateDetails, GateVerdict, ScopeCheck};

pub(super) const ALL_GATES_PASSED: &str =
    "All release gates have been passed. The release is ready for GA.";

pub(super) fn recommendations(verdicts: &[GateVerdict]) -> Vec<String> {
    let mut out = Vec::new();
    for verdict in verdicts.iter().filter(|verdict| !verdict.passed) {
        let label = format!("{} {}", verdict.gate_id.label(), verdict.name);
        match &verdict.details {
            GateDetails::PlatformTypeCoverage(details) => {
                out.push(with_reason(&label, verdict.reason.as_deref()));
                out.extend(
                    details
                        .checks
                        .iter()
                        .filter(|check| !check.passed)
                        .map(scope_recommendation),
                );
            }
            GateDetails::PlatformCoverage(_) => {
                out.push(with_reason(&label, verdict.reason.as_deref()));
            }
            GateDetails::OpenBugs(details) => {
                out.push(format!(
                    "{label}: {} open bug(s) need resolution ({} on dev, {} on QA)",
                    details.bugs.total_open, details.bugs.on_dev, details.bugs.on_qa
                ));
            }
            GateDetails::SubTaskAcceptance(details) => {
                out.push(format!(
                    "{label}: {} execution task(s) need acceptance",
                    details.counts.outstanding()
                ));
            }
            GateDetails::OverallMetrics(details) => {
                let check = &details.check;
                if !check.coverage_passed {
                    out.push(format!(
                        "{label}: need {:.2}% more coverage (execute ~{} more tests, ~{:.1} hours)",
                        check.coverage_gap,
                        check.remediation.tests_needed,
                        check.remediation.hours_needed
                    ));
                }
                if !check.pass_ratio_passed {
                    out.push(format!(
                        "{label}: improve test stability: need {:.2}% improvement in pass rate",
                        check.pass_ratio_gap
                    ));
                }
            }
        }
    }
    if out.is_empty() {
        out.push(ALL_GATES_PASSED.to_string());
    }
    out
}

fn with_reason(label: &str, reason: Option<&str>) -> String {
    match reason {
        Some(reason) => format!("{label}: {reason}"),
        None => label.to_string(),
    }
}

fn scope_recommendation(check: &ScopeCheck) -> String {
    let mut line = format!(
        "{}: execute ~{} more tests (~{:.1} hours)",
        check.row.label(),
        check.remediation.tests_needed,
        check.remediation.hours_needed
    );
    if let Some(reason) = &check.reason {
        line.push_str(&format!(" [{reason}]"));
    }
    line
}
