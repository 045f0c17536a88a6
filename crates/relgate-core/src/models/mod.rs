mod gate;
mod metrics;
mod report;
mod tracker;

pub use gate::{
    GateDetails, GateId, GateStatus, GateVerdict, OpenBugsDetails, OverallMetricsDetails,
    PlatformCheck, PlatformCoverageDetails, PlatformTypeCoverageDetails, Remediation, ScopeCheck,
    SubTaskAcceptanceDetails,
};
pub use metrics::MetricRow;
pub(crate) use metrics::percent;
pub use report::{GateInputs, ReleaseReadinessReport, ReportContext};
pub use tracker::{BugCounts, SubTaskCategory, SubTaskExecutionCounts};
