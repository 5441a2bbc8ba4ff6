//! Coverage configuration
//!
//! Loaded from YAML or built in code:
//!
//! ```yaml
//! coverage_path: target/coverage.catg
//! harness_classes: ["catg/CATG"]
//! print_on_commit: true
//! ```

use crate::filter::{HarnessClasses, DEFAULT_HARNESS_CLASS};
use crate::{CoverageError, CoverageResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default persistence file name
pub const DEFAULT_COVERAGE_PATH: &str = "coverage.catg";

/// Configuration of a coverage session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Persistence file
    pub coverage_path: PathBuf,
    /// Classes whose branches are never counted
    pub harness_classes: Vec<String>,
    /// Print the coverage line at every commit
    pub print_on_commit: bool,
}

impl CoverageConfig {
    /// Create a builder for coverage config
    #[must_use]
    pub fn builder() -> CoverageConfigBuilder {
        CoverageConfigBuilder::default()
    }

    /// Parse configuration from YAML text
    pub fn from_yaml(yaml: &str) -> CoverageResult<Self> {
        serde_yaml_ng::from_str(yaml)
            .map_err(|e| CoverageError::config(format!("invalid coverage config: {e}")))
    }

    /// Load configuration from a YAML file
    pub fn from_file(path: &Path) -> CoverageResult<Self> {
        let yaml = fs::read_to_string(path).map_err(|e| {
            CoverageError::config(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Filter built from `harness_classes`
    #[must_use]
    pub fn harness_filter(&self) -> HarnessClasses {
        HarnessClasses::new(self.harness_classes.iter().cloned())
    }
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            coverage_path: PathBuf::from(DEFAULT_COVERAGE_PATH),
            harness_classes: vec![DEFAULT_HARNESS_CLASS.to_string()],
            print_on_commit: true,
        }
    }
}

/// Builder for coverage configuration
#[derive(Debug, Default)]
pub struct CoverageConfigBuilder {
    coverage_path: Option<PathBuf>,
    harness_classes: Option<Vec<String>>,
    print_on_commit: Option<bool>,
}

impl CoverageConfigBuilder {
    /// Set the persistence file
    #[must_use]
    pub fn coverage_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.coverage_path = Some(path.into());
        self
    }

    /// Replace the harness class list
    #[must_use]
    pub fn harness_classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.harness_classes = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Enable or disable the per-commit coverage line
    #[must_use]
    pub fn print_on_commit(mut self, enabled: bool) -> Self {
        self.print_on_commit = Some(enabled);
        self
    }

    /// Build the configuration
    #[must_use]
    pub fn build(self) -> CoverageConfig {
        let defaults = CoverageConfig::default();
        CoverageConfig {
            coverage_path: self.coverage_path.unwrap_or(defaults.coverage_path),
            harness_classes: self.harness_classes.unwrap_or(defaults.harness_classes),
            print_on_commit: self.print_on_commit.unwrap_or(defaults.print_on_commit),
        }
    }
}
