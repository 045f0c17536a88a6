use std::path::PathBuf;

use clap::{Args, ValueEnum};
use relgate_core::ReportFormat;

use super::parsers::parse_non_negative_f64;

#[derive(Debug, Args)]
pub struct EvaluateArgs {
    /// Gate snapshot JSON produced by the metrics and tracker collaborators.
    #[arg(long)]
    pub input: PathBuf,
    /// TOML file overriding gate thresholds. Falls back to `RELGATE_POLICY_FILE`.
    #[arg(long)]
    pub policy: Option<PathBuf>,
    /// Release version label; overrides the snapshot's `version`.
    #[arg(long)]
    pub release_version: Option<String>,
    /// Build selection label (`95-106` or `95,96,101`); overrides the snapshot's `builds`.
    #[arg(long)]
    pub builds: Option<String>,
    /// Measured execution rate; overrides the snapshot and policy default.
    #[arg(long, value_parser = parse_non_negative_f64)]
    pub tests_per_hour: Option<f64>,
    #[arg(long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
    /// Report destination. A directory receives the default report file name.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Exit non-zero when the release is not ready.
    #[arg(long, default_value_t = false)]
    pub enforce: bool,
}

#[derive(Debug, Args)]
pub struct BuildsArgs {
    pub selection: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Json,
    Text,
    Csv,
}

impl From<FormatArg> for ReportFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
            FormatArg::Csv => Self::Csv,
        }
    }
}
