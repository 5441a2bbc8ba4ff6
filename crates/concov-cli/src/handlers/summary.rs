//! Summary command handler

use crate::commands::StoreArgs;
use crate::config::resolve_coverage_config;
use crate::error::CliResult;
use concov::CoverageStore;

/// The `Coverage <p>%` line for a store
#[must_use]
pub fn coverage_line(store: &CoverageStore) -> String {
    format!("Coverage {}%", store.percent())
}

/// Execute the summary command
///
/// An unreadable store reads as empty, exactly as a harness run would see it.
pub fn execute_summary(args: &StoreArgs) -> CliResult<()> {
    let config = resolve_coverage_config(args)?;
    let store = CoverageStore::load_or_default(&config.coverage_path, config.harness_filter());
    tracing::info!(
        classes = store.class_count(),
        branches = store.n_branches(),
        covered = store.n_covered(),
        "store summary"
    );
    println!("{}", coverage_line(&store));
    Ok(())
}
