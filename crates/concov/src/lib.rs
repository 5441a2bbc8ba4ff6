//! Concov: Persistent Branch Coverage for Concolic Testing
//!
//! An instrumentation layer reports every class it loads and every
//! conditional branch the program takes. Concov keeps the cross-execution
//! picture: how many branch sides exist, which have ever been taken, and the
//! resulting coverage percentage, persisted between runs so that successive
//! executions grow one shared record.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  CONCOV                                                         │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  Instrumentor ─► get_cid / add_branch_count ─► CoverageState    │
//! │               ─► visit_branch ─► PendingBranches                │
//! │  Runner       ─► commit_branches: Pending ∪► CoverageState      │
//! │               ─► save / load ◄─► "CCOV" blob on disk            │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use concov::{BranchId, CoverageStore};
//!
//! let mut store = CoverageStore::new();
//! store.get_cid("Foo");
//! store.add_branch_count(BranchId::new(10));
//! store.visit_branch(BranchId::new(10), true);
//! let summary = store.commit();
//! assert_eq!(summary.to_string(), "Coverage 50.0%");
//! ```

#![warn(missing_docs)]

mod config;
mod filter;
mod ids;
mod mask;
mod pending;
pub mod persist;
mod result;
mod session;
mod state;
mod store;
mod summary;

pub use config::{CoverageConfig, CoverageConfigBuilder, DEFAULT_COVERAGE_PATH};
pub use filter::{ClassFilter, HarnessClasses, DEFAULT_HARNESS_CLASS};
pub use ids::{BranchId, ClassId};
pub use mask::SideMask;
pub use pending::PendingBranches;
pub use result::{CoverageError, CoverageResult};
pub use session::CoverageSession;
pub use state::CoverageState;
pub use store::CoverageStore;
pub use summary::{CommitSummary, CoveragePercent};
