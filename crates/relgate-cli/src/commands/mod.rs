use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use relgate_core::models::ReleaseReadinessReport;
use relgate_core::report::default_report_file_name;
use relgate_core::{
    BuildSelection, GateSnapshot, ReportFormat, assemble_report, evaluate, render_report,
    resolve_policy,
};
use serde::Serialize;
use tracing::info;

use crate::cli::{BuildsArgs, Commands, EvaluateArgs, PolicyCommand};

mod support;

#[cfg(test)]
mod tests;

use self::support::{gate_failure, print_json};

pub(crate) fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Evaluate(args) => handle_evaluate(args),
        Commands::Policy(args) => match args.command {
            PolicyCommand::Show { policy } => {
                let policy = resolve_policy(policy.as_deref())
                    .map_err(|err| gate_failure(err, "policy.show"))?;
                print_json(&policy)
            }
        },
        Commands::Builds(args) => handle_builds(&args),
    }
}

fn handle_evaluate(args: EvaluateArgs) -> Result<()> {
    let policy =
        resolve_policy(args.policy.as_deref()).map_err(|err| gate_failure(err, "evaluate"))?;
    let snapshot = GateSnapshot::load(&args.input)
        .map_err(|err| gate_failure(err, "evaluate"))
        .with_context(|| format!("failed to load snapshot {}", args.input.display()))?;

    let mut context = snapshot
        .context()
        .map_err(|err| gate_failure(err, "evaluate"))?;
    if let Some(version) = args.release_version {
        context.version = Some(version);
    }
    if let Some(raw) = args.builds.as_deref() {
        let builds = BuildSelection::parse(raw).map_err(|err| gate_failure(err, "evaluate"))?;
        context.builds = Some(builds);
    }

    let mut inputs = snapshot
        .to_inputs(&policy)
        .map_err(|err| gate_failure(err, "evaluate"))?;
    if let Some(rate) = args.tests_per_hour {
        inputs.tests_per_hour = rate;
    }

    let verdicts = evaluate(&inputs, &policy).map_err(|err| gate_failure(err, "evaluate"))?;
    let report = assemble_report(context, verdicts);
    let format = ReportFormat::from(args.format);
    let rendered = render_report(&report, format)?;

    match args.output.as_deref() {
        Some(output) => {
            let path = resolve_output_path(output, &report, format);
            fs::write(&path, rendered.as_bytes())
                .with_context(|| format!("failed to write report {}", path.display()))?;
            info!(path = %path.display(), "release gate report written");
        }
        None => {
            print!("{rendered}");
            if !rendered.ends_with('\n') {
                println!();
            }
        }
    }

    if args.enforce && !report.ready {
        let failed = report.gates_total - report.gates_passed;
        bail!(
            "release gate failed: {failed} of {} gates not passed",
            report.gates_total
        );
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct BuildsOutput {
    selection: BuildSelection,
    builds: Vec<String>,
    count: usize,
    label: String,
}

fn handle_builds(args: &BuildsArgs) -> Result<()> {
    let selection =
        BuildSelection::parse(&args.selection).map_err(|err| gate_failure(err, "builds"))?;
    let output = BuildsOutput {
        builds: selection.builds(),
        count: selection.len(),
        label: selection.file_label(),
        selection,
    };
    print_json(&output)
}

/// A directory output receives the default report file name.
fn resolve_output_path(
    output: &Path,
    report: &ReleaseReadinessReport,
    format: ReportFormat,
) -> PathBuf {
    if output.is_dir() {
        output.join(default_report_file_name(report, format))
    } else {
        output.to_path_buf()
    }
}
