//! Reset command handler

use crate::commands::StoreArgs;
use crate::config::resolve_coverage_config;
use crate::error::CliResult;
use std::fs;
use std::io;
use std::path::Path;

/// Remove the store at `path`; returns whether a file was removed
pub fn remove_store(path: &Path) -> CliResult<bool> {
    match fs::remove_file(path) {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(e.into()),
    }
}

/// Execute the reset command
pub fn execute_reset(args: &StoreArgs) -> CliResult<()> {
    let config = resolve_coverage_config(args)?;
    let path = &config.coverage_path;
    if remove_store(path)? {
        tracing::info!(path = %path.display(), "removed coverage store");
        println!("Removed {}", path.display());
    } else {
        println!("No coverage store at {}", path.display());
    }
    Ok(())
}
