//! Concov CLI Library
//!
//! Command-line tooling around a persisted coverage store: replay recorded
//! instrumentor traces, print a store's coverage, reset a campaign.

#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod commands;
mod config;
mod error;
pub mod handlers;
pub mod logging;
pub mod trace;

pub use commands::{Cli, Commands, ReplayArgs, StoreArgs};
pub use config::{resolve_coverage_config, Verbosity};
pub use error::{CliError, CliResult};
pub use trace::{apply_events, parse_trace, ReplayStats, TraceEvent};
