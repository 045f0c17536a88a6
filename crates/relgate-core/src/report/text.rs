use std::fmt::Write as _;

use crate::models::{GateDetails, GateVerdict, ReleaseReadinessReport};

pub(super) fn render_text(report: &ReleaseReadinessReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "RELEASE GATE ANALYSIS");
    if let Some(version) = &report.version {
        let _ = writeln!(out, "Version: {version}");
    }
    if let Some(builds) = &report.builds {
        let _ = writeln!(out, "Builds: {}", builds.display());
    }
    let _ = writeln!(out, "Generated: {}", report.created_at);
    out.push('\n');

    for verdict in &report.verdicts {
        let _ = writeln!(
            out,
            "[{}] {} - {}",
            verdict.status.as_str(),
            verdict.gate_id.label(),
            verdict.name
        );
        if let Some(reason) = &verdict.reason {
            let _ = writeln!(out, "    {reason}");
        }
        write_detail_lines(&mut out, verdict);
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "SUMMARY: {}/{} gates passed",
        report.gates_passed, report.gates_total
    );
    let _ = writeln!(
        out,
        "OVERALL RELEASE STATUS: {}",
        if report.ready {
            "READY FOR RELEASE"
        } else {
            "NOT READY FOR RELEASE"
        }
    );
    out.push('\n');
    let _ = writeln!(out, "Recommendations:");
    for recommendation in &report.recommendations {
        let _ = writeln!(out, "  - {recommendation}");
    }
    out
}

fn write_detail_lines(out: &mut String, verdict: &GateVerdict) {
    match &verdict.details {
        GateDetails::PlatformTypeCoverage(details) => {
            for check in &details.checks {
                let _ = writeln!(
                    out,
                    "    {} {}: Cov={:.2}% Pass={:.2}%",
                    if check.passed { "ok  " } else { "FAIL" },
                    check.row.label(),
                    check.coverage_percent,
                    check.pass_ratio
                );
            }
        }
        GateDetails::PlatformCoverage(details) => {
            for check in &details.checks {
                let _ = writeln!(
                    out,
                    "    {} {}: {:.2}% ({}/{})",
                    if check.passed { "ok  " } else { "FAIL" },
                    check.row.scope,
                    check.coverage_percent,
                    check.row.tests_executed,
                    check.row.available_tests
                );
            }
        }
        GateDetails::OpenBugs(details) => {
            let _ = writeln!(
                out,
                "    Bugs on Dev: {}, Bugs on QA: {}, Total Open: {}",
                details.bugs.on_dev, details.bugs.on_qa, details.bugs.total_open
            );
        }
        GateDetails::SubTaskAcceptance(details) => {
            let _ = writeln!(
                out,
                "    Total: {}, Accepted: {}, Completed (Not Accepted): {}, In Progress: {}, Not Started: {}",
                details.counts.total,
                details.counts.accepted,
                details.completed_not_accepted,
                details.counts.in_progress,
                details.counts.not_started
            );
        }
        GateDetails::OverallMetrics(details) => {
            let check = &details.check;
            let _ = writeln!(
                out,
                "    Coverage: {:.2}% ({}/{}), Pass Ratio: {:.2}% ({}/{})",
                check.coverage_percent,
                check.row.tests_executed,
                check.row.available_tests,
                check.pass_ratio,
                check.row.tests_passed,
                check.row.pass_ratio_denominator()
            );
        }
    }
}
