//! Per-Execution Observation Buffer
//!
//! Runtime branch visits are buffered here and only folded into the durable
//! record at commit. An execution that is abandoned before commit therefore
//! never touches the persisted totals.

use crate::{BranchId, SideMask};
use std::collections::BTreeMap;

/// Scratch accumulator of branch observations not yet committed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PendingBranches {
    observed: BTreeMap<BranchId, SideMask>,
}

impl PendingBranches {
    /// Create an empty buffer
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one taken side of a branch
    ///
    /// This is the hot path: it runs at every taken conditional of the
    /// instrumented program.
    #[inline]
    pub fn record(&mut self, iid: BranchId, side: bool) {
        let entry = self.observed.entry(iid).or_default();
        *entry = entry.union(SideMask::for_side(side));
    }

    /// Observations recorded so far for `iid`
    #[must_use]
    pub fn get(&self, iid: BranchId) -> Option<SideMask> {
        self.observed.get(&iid).copied()
    }

    /// Take every buffered observation, leaving the buffer empty
    pub fn drain(&mut self) -> impl Iterator<Item = (BranchId, SideMask)> {
        std::mem::take(&mut self.observed).into_iter()
    }

    /// Discard every buffered observation
    pub fn clear(&mut self) {
        self.observed.clear();
    }

    /// Number of distinct branches observed
    #[must_use]
    pub fn len(&self) -> usize {
        self.observed.len()
    }

    /// Nothing buffered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observed.is_empty()
    }
}
