//! JSON snapshot of one report run's inputs, as handed over by the metrics
//! and issue-tracker collaborators.
//!
//! Counts are read as signed integers so a negative value is reported as a
//! validation error naming the field instead of an opaque parse error.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::builds::BuildSelection;
use crate::config::GatePolicy;
use crate::error::{GateError, Result};
use crate::models::{BugCounts, GateInputs, MetricRow, ReportContext, SubTaskExecutionCounts};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub builds: Option<String>,
    #[serde(default)]
    pub platform_type_rows: Vec<MetricRowInput>,
    #[serde(default)]
    pub platform_rows: Vec<MetricRowInput>,
    pub overall: MetricRowInput,
    pub bugs: BugCountsInput,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtasks: Option<SubTaskCountsInput>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtask_statuses: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tests_per_hour: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricRowInput {
    pub scope: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    pub tests_executed: i64,
    pub available_tests: i64,
    pub tests_passed: i64,
    pub tests_failed: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_executions: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BugCountsInput {
    pub on_dev: i64,
    pub on_qa: i64,
    pub total_open: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SubTaskCountsInput {
    pub total: i64,
    pub accepted: i64,
    pub completed: i64,
    pub in_progress: i64,
    pub not_started: i64,
}

impl GateSnapshot {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Report labels carried by the snapshot. Build labels must parse.
    pub fn context(&self) -> Result<ReportContext> {
        let builds = match self.builds.as_deref() {
            Some(raw) if !raw.trim().is_empty() => Some(BuildSelection::parse(raw)?),
            _ => None,
        };
        Ok(ReportContext {
            version: self
                .version
                .as_deref()
                .map(str::trim)
                .filter(|value| !value.is_empty())
                .map(ToString::to_string),
            builds,
        })
    }

    /// Converts to evaluator inputs. A missing execution rate falls back to
    /// `policy.default_tests_per_hour`.
    pub fn to_inputs(&self, policy: &GatePolicy) -> Result<GateInputs> {
        let platform_type_rows = self
            .platform_type_rows
            .iter()
            .enumerate()
            .map(|(index, row)| row.to_metric_row(&format!("platform_type_rows[{index}]")))
            .collect::<Result<Vec<_>>>()?;
        let platform_rows = self
            .platform_rows
            .iter()
            .enumerate()
            .map(|(index, row)| row.to_metric_row(&format!("platform_rows[{index}]")))
            .collect::<Result<Vec<_>>>()?;

        let subtasks = match (&self.subtasks, &self.subtask_statuses) {
            (Some(counts), None) => counts.to_counts()?,
            (None, Some(statuses)) => SubTaskExecutionCounts::from_statuses(statuses),
            (Some(_), Some(_)) => {
                return Err(GateError::validation(
                    "snapshot must not carry both subtasks and subtask_statuses",
                ));
            }
            (None, None) => {
                return Err(GateError::validation(
                    "snapshot must carry subtasks or subtask_statuses",
                ));
            }
        };

        Ok(GateInputs {
            platform_type_rows,
            platform_rows,
            overall: self.overall.to_metric_row("overall")?,
            bugs: self.bugs.to_counts()?,
            subtasks,
            tests_per_hour: self
                .tests_per_hour
                .unwrap_or(policy.default_tests_per_hour),
        })
    }
}

impl MetricRowInput {
    fn to_metric_row(&self, field: &str) -> Result<MetricRow> {
        Ok(MetricRow {
            scope: self.scope.clone(),
            mode: self.mode.clone(),
            tests_executed: non_negative(field, "tests_executed", self.tests_executed)?,
            available_tests: non_negative(field, "available_tests", self.available_tests)?,
            tests_passed: non_negative(field, "tests_passed", self.tests_passed)?,
            tests_failed: non_negative(field, "tests_failed", self.tests_failed)?,
            total_executions: self
                .total_executions
                .map(|value| non_negative(field, "total_executions", value))
                .transpose()?,
        })
    }
}

impl BugCountsInput {
    fn to_counts(self) -> Result<BugCounts> {
        Ok(BugCounts {
            on_dev: non_negative("bugs", "on_dev", self.on_dev)?,
            on_qa: non_negative("bugs", "on_qa", self.on_qa)?,
            total_open: non_negative("bugs", "total_open", self.total_open)?,
        })
    }
}

impl SubTaskCountsInput {
    fn to_counts(self) -> Result<SubTaskExecutionCounts> {
        Ok(SubTaskExecutionCounts {
            total: non_negative("subtasks", "total", self.total)?,
            accepted: non_negative("subtasks", "accepted", self.accepted)?,
            completed: non_negative("subtasks", "completed", self.completed)?,
            in_progress: non_negative("subtasks", "in_progress", self.in_progress)?,
            not_started: non_negative("subtasks", "not_started", self.not_started)?,
        })
    }
}

fn non_negative(section: &str, field: &str, value: i64) -> Result<u64> {
    u64::try_from(value).map_err(|_| {
        GateError::validation(format!("{section}.{field} must be >= 0, got {value}"))
    })
}
