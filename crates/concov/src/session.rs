//! Coverage session: one process's ownership of the store
//!
//! The runner opens a session at startup, hands `store_mut()` to the
//! instrumentor, calls [`CoverageSession::end_execution`] after each
//! execution and [`CoverageSession::finish`] at shutdown.

use crate::{CommitSummary, CoverageConfig, CoverageResult, CoverageStore};
use std::path::Path;

/// A loaded store bound to its configuration
#[derive(Debug)]
pub struct CoverageSession {
    config: CoverageConfig,
    store: CoverageStore,
}

impl CoverageSession {
    /// Load the configured store, or start empty if it cannot be read
    #[must_use]
    pub fn open(config: CoverageConfig) -> Self {
        let store = CoverageStore::load_or_default(&config.coverage_path, config.harness_filter());
        Self { config, store }
    }

    /// Store for the instrumentor
    #[must_use]
    pub const fn store(&self) -> &CoverageStore {
        &self.store
    }

    /// Mutable store for the instrumentor
    pub fn store_mut(&mut self) -> &mut CoverageStore {
        &mut self.store
    }

    /// Session configuration
    #[must_use]
    pub const fn config(&self) -> &CoverageConfig {
        &self.config
    }

    /// Persistence file
    #[must_use]
    pub fn coverage_path(&self) -> &Path {
        &self.config.coverage_path
    }

    /// Commit the execution that just ended
    pub fn end_execution(&mut self) -> CommitSummary {
        if self.config.print_on_commit {
            self.store.commit_branches()
        } else {
            self.store.commit()
        }
    }

    /// Save the store to the configured path
    pub fn save(&mut self) -> CoverageResult<()> {
        self.store.save(&self.config.coverage_path)
    }

    /// Save and end the session, terminating the process if the store
    /// cannot be written
    ///
    /// Losing coverage progress silently would mislead a campaign, so a
    /// failed save exits with status 1.
    pub fn finish(mut self) {
        if let Err(e) = self.save() {
            tracing::error!(
                path = %self.config.coverage_path.display(),
                "failed to save coverage store: {e}"
            );
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;
    use crate::BranchId;
    use tempfile::TempDir;

    fn quiet_config(dir: &TempDir) -> CoverageConfig {
        CoverageConfig::builder()
            .coverage_path(dir.path().join("coverage.catg"))
            .print_on_commit(false)
            .build()
    }

    #[test]
    fn test_open_without_file_starts_empty() {
        let dir = TempDir::new().unwrap();
        let session = CoverageSession::open(quiet_config(&dir));
        assert_eq!(session.store().class_count(), 0);
        assert_eq!(session.store().n_branches(), 0);
    }

    #[test]
    fn test_session_uses_configured_harness_classes() {
        let dir = TempDir::new().unwrap();
        let config = CoverageConfig::builder()
            .coverage_path(dir.path().join("c.catg"))
            .harness_classes(["support/Rt"])
            .print_on_commit(false)
            .build();
        let mut session = CoverageSession::open(config);

        let store = session.store_mut();
        store.get_cid("support/Rt");
        assert!(!store.is_new_class());
        store.get_cid("catg/CATG");
        assert!(store.is_new_class());
    }

    #[test]
    fn test_finish_persists_for_next_session() {
        let dir = TempDir::new().unwrap();

        let mut first = CoverageSession::open(quiet_config(&dir));
        first.store_mut().get_cid("Foo");
        first.store_mut().add_branch_count(BranchId::new(3));
        first.store_mut().visit_branch(BranchId::new(3), false);
        let summary = first.end_execution();
        assert_eq!(summary.newly_covered, 1);
        first.finish();

        let second = CoverageSession::open(quiet_config(&dir));
        assert_eq!(second.store().n_branches(), 2);
        assert_eq!(second.store().n_covered(), 1);
        assert_eq!(second.coverage_path(), dir.path().join("coverage.catg"));
    }

    #[test]
    fn test_save_reports_unwritable_path() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, b"x").unwrap();
        let config = CoverageConfig::builder()
            .coverage_path(blocker.join("coverage.catg"))
            .print_on_commit(false)
            .build();

        let mut session = CoverageSession::open(config);
        assert!(session.save().is_err());
    }
}
