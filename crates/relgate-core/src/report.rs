use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::models::{GateVerdict, ReleaseReadinessReport, ReportContext};
use crate::release_gate::{overall_status, release_ready, unresolved_gates};

mod csv;
mod recommend;
mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    Json,
    Text,
    Csv,
}

/// Wraps evaluated verdicts with labels, a timestamp and recommendations.
pub fn assemble_report(context: ReportContext, verdicts: Vec<GateVerdict>) -> ReleaseReadinessReport {
    let ready = release_ready(&verdicts);
    let gates_total = verdicts.len();
    let gates_passed = gates_total - unresolved_gates(&verdicts);
    let recommendations = recommend::recommendations(&verdicts);
    info!(
        version = context.version.as_deref().unwrap_or(""),
        ready,
        gates_passed,
        gates_total,
        "release gate report assembled"
    );

    ReleaseReadinessReport {
        version: context.version,
        builds: context.builds,
        created_at: Utc::now().to_rfc3339(),
        ready,
        status: overall_status(&verdicts),
        gates_passed,
        gates_total,
        verdicts,
        recommendations,
    }
}

#[must_use]
pub fn recommendations(verdicts: &[GateVerdict]) -> Vec<String> {
    recommend::recommendations(verdicts)
}

pub fn render_report(report: &ReleaseReadinessReport, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Text => Ok(text::render_text(report)),
        ReportFormat::Csv => Ok(csv::render_csv(report)),
    }
}

/// Default report file name, e.g. `Release_10_12_0_0_Builds_83-106_Gate_Analysis.csv`.
#[must_use]
pub fn default_report_file_name(report: &ReleaseReadinessReport, format: ReportFormat) -> String {
    let version = report
        .version
        .as_deref()
        .unwrap_or("unversioned")
        .replace('.', "_");
    let extension = match format {
        ReportFormat::Json => "json",
        ReportFormat::Text => "txt",
        ReportFormat::Csv => "csv",
    };
    match &report.builds {
        Some(builds) => format!(
            "Release_{version}_Builds_{}_Gate_Analysis.{extension}",
            builds.file_label()
        ),
        None => format!("Release_{version}_Gate_Analysis.{extension}"),
    }
}

#[cfg(test)]
mod tests;
