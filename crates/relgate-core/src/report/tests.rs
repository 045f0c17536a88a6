use super::*;
use crate::builds::BuildSelection;
use crate::config::GatePolicy;
use crate::models::{BugCounts, GateInputs, GateStatus, MetricRow, SubTaskExecutionCounts};
use crate::release_gate::evaluate;

fn inputs() -> GateInputs {
    GateInputs {
        platform_type_rows: vec![
            MetricRow::new("FPGA", Some("Transparent"), 950, 1000, 930, 20),
            MetricRow::new("Software", Some("Routing"), 400, 1000, 350, 50),
        ],
        platform_rows: vec![MetricRow::new("UHT", None, 700, 1000, 690, 10)],
        overall: MetricRow::new("overall", None, 850, 1000, 800, 50),
        bugs: BugCounts {
            on_dev: 1,
            on_qa: 1,
            total_open: 2,
        },
        subtasks: SubTaskExecutionCounts {
            total: 100,
            accepted: 90,
            completed: 95,
            in_progress: 5,
            not_started: 0,
        },
        tests_per_hour: 100.0,
    }
}

fn context() -> ReportContext {
    ReportContext {
        version: Some("10.12.0.0".to_string()),
        builds: Some(BuildSelection::Range {
            start: 83,
            end: 106,
        }),
    }
}

fn failing_report() -> ReleaseReadinessReport {
    let verdicts = evaluate(&inputs(), &GatePolicy::default()).expect("evaluate");
    assemble_report(context(), verdicts)
}

#[test]
fn assembled_report_counts_gates_and_keeps_labels() {
    let report = failing_report();
    assert!(!report.ready);
    assert_eq!(report.status, GateStatus::NotReady);
    assert_eq!(report.gates_total, 5);
    assert_eq!(report.gates_passed, 1);
    assert_eq!(report.version.as_deref(), Some("10.12.0.0"));
    assert!(chrono::DateTime::parse_from_rfc3339(&report.created_at).is_ok());
}

#[test]
fn recommendations_cover_each_failing_gate() {
    let report = failing_report();
    let joined = report.recommendations.join("\n");
    assert!(joined.contains("Gate 1 Platform Type Coverage: 1 platform type/mode combination(s)"));
    assert!(joined.contains("Software Routing: execute ~500 more tests (~5.0 hours)"));
    assert!(joined.contains("Gate 3 No Open Bugs: 2 open bug(s) need resolution"));
    assert!(joined.contains("Gate 4 Sub Test Executions: 10 execution task(s) need acceptance"));
    assert!(joined.contains("Gate 5 Overall Metrics: need 5.00% more coverage"));
    assert!(!joined.contains("improve test stability"));
    assert!(!joined.contains("Gate 2"));
}

#[test]
fn report_status_is_pending_without_a_hard_blocker() {
    let mut inputs = inputs();
    inputs.subtasks = SubTaskExecutionCounts {
        total: 100,
        accepted: 97,
        completed: 97,
        in_progress: 3,
        not_started: 0,
    };
    let verdicts = evaluate(&inputs, &GatePolicy::default()).expect("evaluate");
    let report = assemble_report(context(), verdicts);
    assert!(!report.ready);
    assert_eq!(report.status, GateStatus::Pending);
}

#[test]
fn passing_release_gets_single_ready_recommendation() {
    let mut inputs = inputs();
    inputs.platform_type_rows.truncate(1);
    inputs.overall = MetricRow::new("overall", None, 950, 1000, 940, 10);
    inputs.bugs = BugCounts::default();
    inputs.subtasks = SubTaskExecutionCounts {
        total: 3,
        accepted: 3,
        completed: 3,
        in_progress: 0,
        not_started: 0,
    };
    let verdicts = evaluate(&inputs, &GatePolicy::default()).expect("evaluate");
    let report = assemble_report(ReportContext::default(), verdicts);
    assert!(report.ready);
    assert_eq!(report.status, GateStatus::Ready);
    assert_eq!(report.recommendations, vec![recommend::ALL_GATES_PASSED.to_string()]);
}

#[test]
fn text_render_lists_every_gate_and_overall_status() {
    let rendered = render_report(&failing_report(), ReportFormat::Text).expect("render");
    assert!(rendered.contains("Version: 10.12.0.0"));
    assert!(rendered.contains("Builds: 83, 84"));
    assert!(rendered.contains("[PENDING] Gate 1 - Platform Type Coverage"));
    assert!(rendered.contains("[READY] Gate 2 - Platform Coverage"));
    assert!(rendered.contains("[NOT_READY] Gate 4 - Sub Test Executions"));
    assert!(rendered.contains("SUMMARY: 1/5 gates passed"));
    assert!(rendered.contains("OVERALL RELEASE STATUS: NOT READY FOR RELEASE"));
    assert!(!rendered.contains('\u{1b}'));
}

#[test]
fn csv_render_has_header_and_one_row_per_gate() {
    let rendered = render_report(&failing_report(), ReportFormat::Csv).expect("render");
    let lines = rendered.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 6);
    assert_eq!(
        lines[0],
        "gate,name,passed,status,reason,tests_needed,hours_needed"
    );
    assert_eq!(
        lines[1],
        "1,Platform Type Coverage,false,PENDING,1 platform type/mode combination(s) below 90% threshold,500,5.00"
    );
    assert_eq!(lines[2], "2,Platform Coverage,true,READY,,,");
}

#[test]
fn csv_fields_with_separators_are_quoted() {
    assert_eq!(csv::escape_field("plain"), "plain");
    assert_eq!(csv::escape_field("a,b"), "\"a,b\"");
    assert_eq!(csv::escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
}

#[test]
fn json_render_round_trips_through_serde() {
    let report = failing_report();
    let rendered = render_report(&report, ReportFormat::Json).expect("render");
    let parsed: ReleaseReadinessReport = serde_json::from_str(&rendered).expect("parse");
    assert_eq!(parsed.ready, report.ready);
    assert_eq!(parsed.recommendations, report.recommendations);
    let statuses = parsed.verdicts.iter().map(|verdict| verdict.status).collect::<Vec<_>>();
    assert_eq!(
        statuses,
        report.verdicts.iter().map(|verdict| verdict.status).collect::<Vec<_>>()
    );
    let raw: serde_json::Value = serde_json::from_str(&rendered).expect("value");
    assert_eq!(raw["verdicts"][3]["status"], "NOT_READY");
    assert_eq!(raw["verdicts"][0]["gate_id"], "platform_type_coverage");
    assert_eq!(raw["verdicts"][0]["details"]["kind"], "platform_type_coverage");
}

#[test]
fn default_file_name_uses_version_and_build_label() {
    let report = failing_report();
    assert_eq!(
        default_report_file_name(&report, ReportFormat::Csv),
        "Release_10_12_0_0_Builds_83-106_Gate_Analysis.csv"
    );
    let unlabeled = assemble_report(ReportContext::default(), report.verdicts.clone());
    assert_eq!(
        default_report_file_name(&unlabeled, ReportFormat::Json),
        "Release_unversioned_Gate_Analysis.json"
    );
}
