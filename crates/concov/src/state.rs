//! Durable coverage state
//!
//! The part of the store that survives between runs. Per-execution scratch
//! data and the registration flag live in [`crate::CoverageStore`] only.

use crate::{BranchId, ClassId, CoverageError, CoverageResult, SideMask};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Cross-run coverage record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageState {
    /// Class name to dense id
    pub(crate) class_ids: HashMap<String, ClassId>,
    /// Branch sides known to exist (two per registered branch)
    pub(crate) n_branches: u64,
    /// Branch sides ever observed taken
    pub(crate) n_covered: u64,
    /// Union of all committed observations per registered branch
    pub(crate) covered: BTreeMap<BranchId, SideMask>,
}

impl CoverageState {
    /// Empty state
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check the accounting invariants
    ///
    /// A decoded blob that fails this check is treated like an unreadable one.
    pub fn check_invariants(&self) -> CoverageResult<()> {
        let registered = self.covered.len() as u64;
        if self.n_branches != registered * 2 {
            return Err(CoverageError::corrupt(format!(
                "{} branch sides recorded for {registered} registered branches",
                self.n_branches
            )));
        }

        if let Some((iid, mask)) = self
            .covered
            .iter()
            .find(|(_, mask)| SideMask::from_bits(mask.bits()).is_none())
        {
            return Err(CoverageError::corrupt(format!(
                "branch {iid} has invalid side mask {mask}"
            )));
        }

        let popcount: u64 = self.covered.values().map(|m| u64::from(m.count())).sum();
        if self.n_covered != popcount {
            return Err(CoverageError::corrupt(format!(
                "covered count {} disagrees with {popcount} recorded sides",
                self.n_covered
            )));
        }

        let mut ids: Vec<u32> = self.class_ids.values().map(|id| id.as_u32()).collect();
        ids.sort_unstable();
        if ids.iter().enumerate().any(|(i, &id)| i as u32 != id) {
            return Err(CoverageError::corrupt("class ids are not dense"));
        }

        Ok(())
    }
}
