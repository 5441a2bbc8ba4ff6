//! Coverage Store Benchmarks
//!
//! Benchmarks for the branch visit hot path and commit folding.
//!
//! Run with: `cargo bench --bench coverage_ops`

use concov::{BranchId, CoverageStore};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn registered_store(branches: u32) -> CoverageStore {
    let mut store = CoverageStore::new();
    store.get_cid("bench/Target");
    for iid in 0..branches {
        store.add_branch_count(BranchId::new(iid));
    }
    store
}

fn bench_visit_branch(c: &mut Criterion) {
    let mut group = c.benchmark_group("visit_branch");

    for visits in [1_000u32, 10_000, 100_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_visits", visits)),
            &visits,
            |bench, &n| {
                bench.iter(|| {
                    let mut store = registered_store(512);
                    for i in 0..n {
                        store.visit_branch(BranchId::new(i % 512), i % 3 == 0);
                    }
                    black_box(store);
                });
            },
        );
    }

    group.finish();
}

fn bench_commit(c: &mut Criterion) {
    let mut group = c.benchmark_group("commit");

    for branches in [64u32, 1_024, 16_384] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_branches", branches)),
            &branches,
            |bench, &n| {
                bench.iter(|| {
                    let mut store = registered_store(n);
                    for iid in 0..n {
                        store.visit_branch(BranchId::new(iid), iid % 2 == 0);
                    }
                    black_box(store.commit());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_visit_branch, bench_commit);
criterion_main!(benches);
