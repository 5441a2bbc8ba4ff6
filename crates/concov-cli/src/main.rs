//! Concov CLI: inspect and grow persisted branch coverage
//!
//! ## Usage
//!
//! ```bash
//! concov replay run.jsonl --store coverage.catg   # Fold a recorded trace into the store
//! concov summary --config concov.yaml             # Print "Coverage <p>%"
//! concov reset --store coverage.catg              # Start a fresh campaign
//! ```

use clap::Parser;
use concov_cli::{handlers, logging, Cli, CliResult, Commands, Verbosity};
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.quiet, cli.verbose));

    match cli.command {
        Commands::Replay(args) => handlers::execute_replay(&args),
        Commands::Summary(args) => handlers::execute_summary(&args),
        Commands::Reset(args) => handlers::execute_reset(&args),
    }
}
