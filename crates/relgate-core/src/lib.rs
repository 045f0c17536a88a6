// Public fallible APIs in this crate share one concrete error contract (`GateError`).
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type"
)]

pub mod builds;
pub mod config;
pub mod error;
pub mod models;
pub mod release_gate;
pub mod report;
pub mod snapshot;
pub mod subtask_status;

pub use builds::BuildSelection;
pub use config::{GatePolicy, resolve_policy};
pub use error::{GateError, Result};
pub use release_gate::{evaluate, overall_status, release_ready};
pub use report::{ReportFormat, assemble_report, render_report};
pub use snapshot::GateSnapshot;
