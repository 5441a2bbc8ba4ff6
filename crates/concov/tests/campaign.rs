//! Multi-run campaign tests
//!
//! Each "run" opens a fresh session on the same file, the way successive
//! harness processes do.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use concov::{BranchId, CoverageConfig, CoverageSession, SideMask};
use std::fs;
use tempfile::TempDir;

fn config(dir: &TempDir) -> CoverageConfig {
    CoverageConfig::builder()
        .coverage_path(dir.path().join("campaign").join("coverage.catg"))
        .print_on_commit(false)
        .build()
}

/// Registers two classes, each with two branches
fn register(session: &mut CoverageSession) {
    let store = session.store_mut();
    store.get_cid("catg/CATG");
    store.add_branch_count(BranchId::new(100));
    store.get_cid("app/Parser");
    store.add_branch_count(BranchId::new(1));
    store.add_branch_count(BranchId::new(2));
    store.get_cid("app/Lexer");
    store.add_branch_count(BranchId::new(3));
    store.add_branch_count(BranchId::new(4));
}

#[test]
fn test_campaign_grows_single_record() {
    let dir = TempDir::new().unwrap();

    let mut run = CoverageSession::open(config(&dir));
    register(&mut run);
    run.store_mut().visit_branch(BranchId::new(1), true);
    run.store_mut().visit_branch(BranchId::new(100), true);
    let summary = run.end_execution();
    assert_eq!(summary.branches, 8);
    assert_eq!(summary.covered, 1);
    assert_eq!(summary.discarded, 1);
    assert_eq!(summary.to_string(), "Coverage 12.5%");
    run.finish();

    // Second process: classes are already known, registration is a no-op.
    let mut run = CoverageSession::open(config(&dir));
    register(&mut run);
    assert!(!run.store().is_new_class());
    run.store_mut().visit_branch(BranchId::new(1), false);
    run.store_mut().visit_branch(BranchId::new(3), true);
    run.store_mut().visit_branch(BranchId::new(4), false);
    let summary = run.end_execution();
    assert_eq!(summary.newly_covered, 3);
    assert_eq!(summary.to_string(), "Coverage 50.0%");
    run.finish();

    let run = CoverageSession::open(config(&dir));
    let store = run.store();
    assert_eq!(store.class_count(), 3);
    assert_eq!(store.n_branches(), 8);
    assert_eq!(store.n_covered(), 4);
    assert_eq!(store.covered_mask(BranchId::new(1)), Some(SideMask::BOTH));
    assert_eq!(store.covered_mask(BranchId::new(2)), Some(SideMask::EMPTY));
    assert_eq!(store.covered_mask(BranchId::new(100)), None);
}

#[test]
fn test_aborted_execution_leaves_totals_untouched() {
    let dir = TempDir::new().unwrap();

    let mut run = CoverageSession::open(config(&dir));
    register(&mut run);
    run.store_mut().visit_branch(BranchId::new(2), true);
    run.end_execution();

    // Next execution is abandoned before commit.
    run.store_mut().visit_branch(BranchId::new(3), true);
    run.store_mut().visit_branch(BranchId::new(4), true);
    run.finish();

    let run = CoverageSession::open(config(&dir));
    assert_eq!(run.store().n_covered(), 1);
    assert_eq!(run.store().pending_len(), 0);
}

#[test]
fn test_corrupt_store_restarts_campaign() {
    let dir = TempDir::new().unwrap();
    let cfg = config(&dir);
    fs::create_dir_all(cfg.coverage_path.parent().unwrap()).unwrap();
    fs::write(&cfg.coverage_path, b"CCOV\x01\x00garbage").unwrap();

    let mut run = CoverageSession::open(cfg.clone());
    assert_eq!(run.store().class_count(), 0);
    register(&mut run);
    run.end_execution();
    run.finish();

    let run = CoverageSession::open(cfg);
    assert_eq!(run.store().n_branches(), 8);
}
