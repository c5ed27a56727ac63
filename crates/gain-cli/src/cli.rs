use clap::Parser;

/// Takes no arguments: always merges `new_exercises.json` into
/// `exercises.json` in the current directory.
#[derive(Parser, Debug)]
#[command(
    name = "gain-merge",
    about = "Merge new_exercises.json into exercises.json, backing up the original",
    version,
)]
pub struct Cli {}
