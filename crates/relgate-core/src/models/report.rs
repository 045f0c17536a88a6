use serde::{Deserialize, Serialize};

use super::{BugCounts, GateStatus, GateVerdict, MetricRow, SubTaskExecutionCounts};
use crate::builds::BuildSelection;

/// Everything one evaluation run consumes. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateInputs {
    pub platform_type_rows: Vec<MetricRow>,
    pub platform_rows: Vec<MetricRow>,
    pub overall: MetricRow,
    pub bugs: BugCounts,
    pub subtasks: SubTaskExecutionCounts,
    pub tests_per_hour: f64,
}

/// Labels attached to a report; never read by the evaluator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<BuildSelection>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseReadinessReport {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<BuildSelection>,
    pub created_at: String,
    pub ready: bool,
    pub status: GateStatus,
    pub gates_passed: usize,
    pub gates_total: usize,
    pub verdicts: Vec<GateVerdict>,
    pub recommendations: Vec<String>,
}
