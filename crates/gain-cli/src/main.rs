use std::process::ExitCode;

use clap::Parser;

mod cli;
mod commands;

fn main() -> anyhow::Result<ExitCode> {
    // stdout carries the one-line summary; diagnostics go to stderr.
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();
    let cli = cli::Cli::parse();
    commands::run_command(cli)
}
