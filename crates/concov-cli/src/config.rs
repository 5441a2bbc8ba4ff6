//! CLI configuration

use crate::commands::StoreArgs;
use crate::error::{CliError, CliResult};
use concov::CoverageConfig;

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Quiet - errors only
    Quiet,
    /// Normal - warnings and errors
    #[default]
    Normal,
    /// Verbose - store load/save activity
    Verbose,
    /// Debug - class registration and dropped observations
    Debug,
}

impl Verbosity {
    /// Verbosity selected by the `-q` and `-v` flags
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Default log filter directive for this level
    #[must_use]
    pub const fn log_filter(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Resolve the coverage configuration for a command
///
/// Starts from the YAML file when one is given, otherwise from defaults, and
/// applies `--store` last.
pub fn resolve_coverage_config(args: &StoreArgs) -> CliResult<CoverageConfig> {
    let mut config = match &args.config {
        Some(path) => CoverageConfig::from_file(path)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?,
        None => CoverageConfig::default(),
    };

    if let Some(store) = &args.store {
        config.coverage_path.clone_from(store);
    }

    Ok(config)
}
