use std::collections::HashMap;
use std::fs;

use tempfile::tempdir;

use super::*;

fn lookup(values: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map = values
        .iter()
        .map(|(key, value)| ((*key).to_string(), (*value).to_string()))
        .collect::<HashMap<_, _>>();
    move |name: &str| map.get(name).cloned()
}

#[test]
fn default_policy_matches_release_thresholds() {
    let policy = GatePolicy::default();
    assert_eq!(policy.platform_type_min_coverage, 90.0);
    assert_eq!(policy.platform_type_min_pass_ratio, 90.0);
    assert_eq!(policy.platform_min_coverage, 50.0);
    assert_eq!(policy.subtask_gap_tolerance_percent, 5.0);
    assert_eq!(policy.overall_min_coverage, 90.0);
    assert_eq!(policy.overall_min_pass_ratio, 90.0);
    assert_eq!(policy.default_tests_per_hour, 100.0);
    policy.validate().expect("defaults are valid");
}

#[test]
fn toml_overrides_apply_only_present_keys() {
    let overrides = PolicyOverrides::from_toml_str(
        "platform_min_coverage = 60.0\nsubtask_gap_tolerance_percent = 2.5\n",
    )
    .expect("parse toml");
    let policy = merge_policy(Some(&overrides), &PolicyOverrides::default()).expect("merge");
    assert_eq!(policy.platform_min_coverage, 60.0);
    assert_eq!(policy.subtask_gap_tolerance_percent, 2.5);
    assert_eq!(policy.overall_min_coverage, 90.0);
}

#[test]
fn toml_rejects_unknown_keys() {
    let err = PolicyOverrides::from_toml_str("coverage_floor = 10.0\n").expect_err("unknown key");
    assert_eq!(err.code(), "TOML_ERROR");
}

#[test]
fn env_overrides_win_over_file_and_ignore_garbage() {
    let file = PolicyOverrides::from_toml_str("overall_min_coverage = 80.0\n").expect("toml");
    let env = PolicyOverrides::from_lookup(lookup(&[
        (ENV_OVERALL_MIN_COVERAGE, "85"),
        (ENV_PLATFORM_MIN_COVERAGE, "not-a-number"),
        (ENV_DEFAULT_TESTS_PER_HOUR, "  "),
    ]));
    let policy = merge_policy(Some(&file), &env).expect("merge");
    assert_eq!(policy.overall_min_coverage, 85.0);
    assert_eq!(policy.platform_min_coverage, 50.0);
    assert_eq!(policy.default_tests_per_hour, 100.0);
}

#[test]
fn out_of_range_threshold_is_invalid_policy() {
    let env = PolicyOverrides::from_lookup(lookup(&[(ENV_PLATFORM_TYPE_MIN_COVERAGE, "120")]));
    let err = merge_policy(None, &env).expect_err("out of range");
    assert_eq!(err.code(), "INVALID_POLICY");
    assert!(err.to_string().contains("platform_type_min_coverage"));
}

#[test]
fn negative_tests_per_hour_is_invalid_policy() {
    let overrides = PolicyOverrides {
        default_tests_per_hour: Some(-1.0),
        ..PolicyOverrides::default()
    };
    let err = merge_policy(Some(&overrides), &PolicyOverrides::default()).expect_err("negative");
    assert_eq!(err.code(), "INVALID_POLICY");
}

#[test]
fn policy_file_is_read_from_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("policy.toml");
    fs::write(&path, "overall_min_pass_ratio = 95.0\n").expect("write policy");
    let overrides = PolicyOverrides::from_file(&path).expect("read policy");
    assert_eq!(overrides.overall_min_pass_ratio, Some(95.0));

    let missing = PolicyOverrides::from_file(&dir.path().join("missing.toml"))
        .expect_err("missing file");
    assert_eq!(missing.code(), "INVALID_POLICY");
}
