use clap::{Parser, Subcommand};

mod args;
mod parsers;
mod policy;


pub use args::{BuildsArgs, EvaluateArgs, FormatArg};
pub use policy::{PolicyArgs, PolicyCommand};

#[derive(Debug, Parser)]
#[command(name = "relgate")]
#[command(about = "Release gate evaluation for QA release sign-off", version)]
pub struct Cli {
    /// Log filter directive (e.g. `debug`, `relgate_core=trace`). Falls back to `RELGATE_LOG`.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Evaluate the five release gates against a metrics snapshot.
    Evaluate(EvaluateArgs),
    Policy(PolicyArgs),
    /// Parse a build selection and print the expanded builds.
    Builds(BuildsArgs),
}
