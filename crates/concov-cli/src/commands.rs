//! CLI command definitions using clap

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Concov: persistent branch coverage for concolic testing harnesses
#[derive(Parser, Debug)]
#[command(name = "concov")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (only errors are logged)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Replay a recorded instrumentor trace into the coverage store
    Replay(ReplayArgs),

    /// Print the coverage line of a persisted store
    Summary(StoreArgs),

    /// Delete the persisted store and start a fresh campaign
    Reset(StoreArgs),
}

/// Options locating the coverage store
#[derive(Args, Debug, Clone, Default)]
pub struct StoreArgs {
    /// Coverage store file (overrides the config file)
    #[arg(short, long)]
    pub store: Option<PathBuf>,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the replay command
#[derive(Parser, Debug)]
pub struct ReplayArgs {
    /// JSON-lines trace of instrumentor events
    pub trace: PathBuf,

    /// Store location
    #[command(flatten)]
    pub store: StoreArgs,

    /// Do not print the coverage line at each commit
    #[arg(long)]
    pub no_print: bool,
}
