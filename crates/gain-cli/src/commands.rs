use std::process::ExitCode;

use anyhow::Context;
use colored::Colorize;
use gain_merge::{MergeConfig, MergeOutcome, Merger};

use crate::cli::Cli;

pub fn run_command(_cli: Cli) -> anyhow::Result<ExitCode> {
    let dir = std::env::current_dir().context("cannot resolve the working directory")?;
    let outcome = run_merge(MergeConfig::in_dir(dir));
    print_outcome(&outcome);
    Ok(exit_code(&outcome))
}

fn run_merge(config: MergeConfig) -> MergeOutcome {
    tracing::debug!(?config, "merge configuration");
    Merger::new(config).run()
}

fn print_outcome(outcome: &MergeOutcome) {
    let line = outcome.to_string();
    if outcome.is_success() {
        println!("{}", line.green());
    } else {
        println!("{}", line.red());
    }
}

fn exit_code(outcome: &MergeOutcome) -> ExitCode {
    if outcome.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
