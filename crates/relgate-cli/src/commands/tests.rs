use relgate_core::models::ReportContext;
use tempfile::tempdir;

use super::*;

fn empty_report() -> ReleaseReadinessReport {
    assemble_report(
        ReportContext {
            version: Some("1.2.3".to_string()),
            builds: None,
        },
        Vec::new(),
    )
}

#[test]
fn output_directory_receives_default_file_name() {
    let dir = tempdir().expect("tempdir");
    let path = resolve_output_path(dir.path(), &empty_report(), ReportFormat::Csv);
    assert_eq!(path, dir.path().join("Release_1_2_3_Gate_Analysis.csv"));
}

#[test]
fn output_file_path_is_used_verbatim() {
    let dir = tempdir().expect("tempdir");
    let target = dir.path().join("gates.json");
    let path = resolve_output_path(&target, &empty_report(), ReportFormat::Json);
    assert_eq!(path, target);
}
