use serde::{Deserialize, Serialize};

use super::{BugCounts, MetricRow, SubTaskExecutionCounts};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GateId {
    PlatformTypeCoverage,
    PlatformCoverage,
    OpenBugs,
    SubTaskAcceptance,
    OverallMetrics,
}

impl GateId {
    pub const ALL: [Self; 5] = [
        Self::PlatformTypeCoverage,
        Self::PlatformCoverage,
        Self::OpenBugs,
        Self::SubTaskAcceptance,
        Self::OverallMetrics,
    ];

    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::PlatformTypeCoverage => 1,
            Self::PlatformCoverage => 2,
            Self::OpenBugs => 3,
            Self::SubTaskAcceptance => 4,
            Self::OverallMetrics => 5,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlatformTypeCoverage => "Platform Type Coverage",
            Self::PlatformCoverage => "Platform Coverage",
            Self::OpenBugs => "No Open Bugs",
            Self::SubTaskAcceptance => "Sub Test Executions",
            Self::OverallMetrics => "Overall Metrics",
        }
    }

    #[must_use]
    pub fn label(self) -> String {
        format!("Gate {}", self.number())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GateStatus {
    Ready,
    Pending,
    NotReady,
}

impl GateStatus {
    #[must_use]
    pub const fn from_passed(passed: bool) -> Self {
        if passed { Self::Ready } else { Self::Pending }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "READY",
            Self::Pending => "PENDING",
            Self::NotReady => "NOT_READY",
        }
    }
}

/// Work estimate to close a coverage shortfall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Remediation {
    pub tests_needed: u64,
    pub hours_needed: f64,
}

/// Threshold check of one coverage/pass-ratio row (gates 1 and 5).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopeCheck {
    pub row: MetricRow,
    pub coverage_percent: f64,
    pub pass_ratio: f64,
    pub coverage_passed: bool,
    pub pass_ratio_passed: bool,
    pub passed: bool,
    pub coverage_gap: f64,
    pub pass_ratio_gap: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub remediation: Remediation,
}

/// Coverage floor check of one platform (gate 2).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCheck {
    pub row: MetricRow,
    pub coverage_percent: f64,
    pub passed: bool,
    pub gap: f64,
    pub tests_needed: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformTypeCoverageDetails {
    pub min_coverage: f64,
    pub min_pass_ratio: f64,
    pub checks: Vec<ScopeCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformCoverageDetails {
    pub min_coverage: f64,
    pub checks: Vec<PlatformCheck>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpenBugsDetails {
    pub bugs: BugCounts,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubTaskAcceptanceDetails {
    pub counts: SubTaskExecutionCounts,
    pub gap_percentage: f64,
    pub completed_not_accepted: u64,
    pub fully_passed: bool,
    pub pending_ok: bool,
    pub tolerance_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallMetricsDetails {
    pub min_coverage: f64,
    pub min_pass_ratio: f64,
    pub check: ScopeCheck,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GateDetails {
    PlatformTypeCoverage(PlatformTypeCoverageDetails),
    PlatformCoverage(PlatformCoverageDetails),
    OpenBugs(OpenBugsDetails),
    SubTaskAcceptance(SubTaskAcceptanceDetails),
    OverallMetrics(OverallMetricsDetails),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateVerdict {
    pub gate_id: GateId,
    pub name: String,
    pub passed: bool,
    pub status: GateStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remediation: Option<Remediation>,
    pub details: GateDetails,
}
