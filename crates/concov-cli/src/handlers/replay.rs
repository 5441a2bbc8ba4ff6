//! Replay command handler

use crate::commands::ReplayArgs;
use crate::config::resolve_coverage_config;
use crate::error::CliResult;
use crate::trace::{apply_events, parse_trace};
use concov::CoverageSession;
use std::fs::File;
use std::io::BufReader;

/// Execute the replay command
///
/// The whole trace is parsed before the store is touched, so a malformed
/// trace never leaves a half-applied campaign behind. A failure to save the
/// store terminates the process.
pub fn execute_replay(args: &ReplayArgs) -> CliResult<()> {
    let mut config = resolve_coverage_config(&args.store)?;
    if args.no_print {
        config.print_on_commit = false;
    }

    let events = parse_trace(BufReader::new(File::open(&args.trace)?))?;

    let mut session = CoverageSession::open(config);
    let stats = apply_events(&mut session, &events);
    tracing::info!(
        events = stats.events,
        executions = stats.executions,
        trace = %args.trace.display(),
        "replayed trace"
    );
    if stats.uncommitted > 0 {
        tracing::warn!(
            branches = stats.uncommitted,
            "trace ends with an uncommitted execution, discarding its observations"
        );
    }

    session.finish();
    Ok(())
}
