use std::path::{Path, PathBuf};

use crate::error::Result;

mod env;
mod overrides;
mod policy;

pub use overrides::{
    ENV_DEFAULT_TESTS_PER_HOUR, ENV_OVERALL_MIN_COVERAGE, ENV_OVERALL_MIN_PASS_RATIO,
    ENV_PLATFORM_MIN_COVERAGE, ENV_PLATFORM_TYPE_MIN_COVERAGE, ENV_PLATFORM_TYPE_MIN_PASS_RATIO,
    ENV_SUBTASK_GAP_TOLERANCE_PERCENT, PolicyOverrides,
};
pub use policy::{
    DEFAULT_OVERALL_MIN_COVERAGE, DEFAULT_OVERALL_MIN_PASS_RATIO, DEFAULT_PLATFORM_MIN_COVERAGE,
    DEFAULT_PLATFORM_TYPE_MIN_COVERAGE, DEFAULT_PLATFORM_TYPE_MIN_PASS_RATIO,
    DEFAULT_SUBTASK_GAP_TOLERANCE_PERCENT, DEFAULT_TESTS_PER_HOUR, GatePolicy,
};

pub const POLICY_FILE_ENV: &str = "RELGATE_POLICY_FILE";

/// Defaults, then the policy file (explicit path or `RELGATE_POLICY_FILE`),
/// then environment overrides. The merged policy is validated once.
pub fn resolve_policy(policy_file: Option<&Path>) -> Result<GatePolicy> {
    let file = policy_file
        .map(Path::to_path_buf)
        .or_else(|| env::read_non_empty_env(POLICY_FILE_ENV).map(PathBuf::from));
    let file_overrides = match file {
        Some(path) => Some(PolicyOverrides::from_file(&path)?),
        None => None,
    };
    merge_policy(file_overrides.as_ref(), &PolicyOverrides::from_env())
}

pub fn merge_policy(
    file_overrides: Option<&PolicyOverrides>,
    env_overrides: &PolicyOverrides,
) -> Result<GatePolicy> {
    let mut policy = GatePolicy::default();
    if let Some(overrides) = file_overrides {
        overrides.apply_to(&mut policy);
    }
    env_overrides.apply_to(&mut policy);
    policy.validate()?;
    Ok(policy)
}

#[cfg(test)]
mod tests;
