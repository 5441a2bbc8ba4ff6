//! Branch Coverage Store
//!
//! Accumulates branch coverage across executions of an instrumented program.
//!
//! # Lifecycle
//!
//! ```text
//! load ──► get_cid / add_branch_count   (class registration)
//!      ──► visit_branch*                (one execution, buffered)
//!      ──► commit_branches              (fold into durable record)
//!      ──► ... more executions ...
//!      ──► save
//! ```
//!
//! Observations are kept in a per-execution buffer until commit, so an
//! execution that is abandoned midway leaves the durable totals untouched.
//! The store assumes single-threaded use.

use crate::filter::{ClassFilter, HarnessClasses};
use crate::{
    persist, BranchId, ClassId, CommitSummary, CoveragePercent, CoverageResult, CoverageState,
    PendingBranches, SideMask,
};
use std::collections::btree_map::Entry;
use std::fmt;
use std::path::Path;

/// Cross-execution branch coverage accumulator
pub struct CoverageStore {
    state: CoverageState,
    pending: PendingBranches,
    is_new_class: bool,
    filter: Box<dyn ClassFilter>,
}

impl CoverageStore {
    /// Empty store excluding the default harness class
    #[must_use]
    pub fn new() -> Self {
        Self::with_filter(HarnessClasses::default())
    }

    /// Empty store excluding classes matched by `filter`
    #[must_use]
    pub fn with_filter(filter: impl ClassFilter + 'static) -> Self {
        Self::from_state(CoverageState::new(), filter)
    }

    /// Store resuming from a previously persisted state
    #[must_use]
    pub fn from_state(state: CoverageState, filter: impl ClassFilter + 'static) -> Self {
        Self {
            state,
            pending: PendingBranches::new(),
            is_new_class: false,
            filter: Box::new(filter),
        }
    }

    /// Load the store persisted at `path`
    ///
    /// A missing, unreadable or malformed file yields an empty store. Only a
    /// missing file is silent; anything else is logged.
    #[must_use]
    pub fn load_or_default(path: &Path, filter: impl ClassFilter + 'static) -> Self {
        match persist::read_state(path) {
            Ok(state) => {
                tracing::info!(
                    path = %path.display(),
                    classes = state.class_ids.len(),
                    branches = state.n_branches,
                    covered = state.n_covered,
                    "loaded coverage store"
                );
                Self::from_state(state, filter)
            }
            Err(e) if e.is_not_found() => {
                tracing::debug!(path = %path.display(), "no coverage store yet, starting empty");
                Self::with_filter(filter)
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "coverage store unreadable, starting empty: {e}"
                );
                Self::with_filter(filter)
            }
        }
    }

    /// Persist the durable part of the store to `path`
    ///
    /// Clears the per-execution buffer first; the blob never carries
    /// uncommitted observations.
    pub fn save(&mut self, path: &Path) -> CoverageResult<()> {
        self.pending.clear();
        persist::write_state(path, &self.state)?;
        tracing::info!(
            path = %path.display(),
            branches = self.state.n_branches,
            covered = self.state.n_covered,
            "saved coverage store"
        );
        Ok(())
    }

    /// Id of `class_name`, registering it on first sight
    ///
    /// Registration of a class not matched by the harness filter turns on
    /// branch counting until the next call.
    pub fn get_cid(&mut self, class_name: &str) -> ClassId {
        if let Some(&cid) = self.state.class_ids.get(class_name) {
            self.is_new_class = false;
            return cid;
        }

        let cid = ClassId::new(self.state.class_ids.len() as u32);
        self.state.class_ids.insert(class_name.to_string(), cid);
        self.is_new_class = !self.filter.is_harness_class(class_name);
        tracing::debug!(
            class = class_name,
            cid = cid.as_u32(),
            counted = self.is_new_class,
            "registered class"
        );
        cid
    }

    /// Declare a branch of the class being registered
    ///
    /// No-op unless the last [`get_cid`](Self::get_cid) registered a counted
    /// class. A branch already known is left as is.
    pub fn add_branch_count(&mut self, iid: BranchId) {
        if !self.is_new_class {
            return;
        }

        match self.state.covered.entry(iid) {
            Entry::Vacant(slot) => {
                slot.insert(SideMask::EMPTY);
                self.state.n_branches += 2;
            }
            Entry::Occupied(_) => {
                tracing::debug!(iid = iid.as_u32(), "branch already registered, ignoring");
            }
        }
    }

    /// Record that `side` of branch `iid` was taken in this execution
    #[inline]
    pub fn visit_branch(&mut self, iid: BranchId, side: bool) {
        self.pending.record(iid, side);
    }

    /// Fold this execution's observations into the durable record
    ///
    /// Observations of unregistered branches are discarded. The buffer is
    /// empty afterwards.
    pub fn commit(&mut self) -> CommitSummary {
        let mut newly_covered = 0u64;
        let mut discarded = 0usize;

        for (iid, observed) in self.pending.drain() {
            let Some(old) = self.state.covered.get_mut(&iid) else {
                discarded += 1;
                continue;
            };
            newly_covered += u64::from(observed.newly_set(*old));
            *old = old.union(observed);
        }
        self.state.n_covered += newly_covered;

        if discarded > 0 {
            tracing::debug!(discarded, "dropped observations of unregistered branches");
        }

        CommitSummary {
            newly_covered,
            covered: self.state.n_covered,
            branches: self.state.n_branches,
            discarded,
        }
    }

    /// [`commit`](Self::commit) and print the `Coverage <p>%` line to stdout
    pub fn commit_branches(&mut self) -> CommitSummary {
        let summary = self.commit();
        println!("{summary}");
        summary
    }

    /// Whether the last [`get_cid`](Self::get_cid) registered a counted class
    #[must_use]
    pub const fn is_new_class(&self) -> bool {
        self.is_new_class
    }

    /// Number of classes seen
    #[must_use]
    pub fn class_count(&self) -> usize {
        self.state.class_ids.len()
    }

    /// Branch sides known to exist
    #[must_use]
    pub const fn n_branches(&self) -> u64 {
        self.state.n_branches
    }

    /// Branch sides ever observed
    #[must_use]
    pub const fn n_covered(&self) -> u64 {
        self.state.n_covered
    }

    /// Committed mask of a registered branch
    #[must_use]
    pub fn covered_mask(&self, iid: BranchId) -> Option<SideMask> {
        self.state.covered.get(&iid).copied()
    }

    /// Registered branches with their committed masks, by ascending id
    pub fn covered(&self) -> impl Iterator<Item = (BranchId, SideMask)> + '_ {
        self.state.covered.iter().map(|(&iid, &mask)| (iid, mask))
    }

    /// Distinct branches observed since the last commit
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Current coverage
    #[must_use]
    pub fn percent(&self) -> CoveragePercent {
        CoveragePercent::of(self.state.n_covered, self.state.n_branches)
    }

    /// Durable part of the store
    #[must_use]
    pub const fn state(&self) -> &CoverageState {
        &self.state
    }

    /// Check the accounting invariants
    pub fn check_invariants(&self) -> CoverageResult<()> {
        self.state.check_invariants()
    }
}

impl Default for CoverageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CoverageStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoverageStore")
            .field("state", &self.state)
            .field("pending", &self.pending)
            .field("is_new_class", &self.is_new_class)
            .finish_non_exhaustive()
    }
}
