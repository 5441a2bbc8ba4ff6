//! Type-Safe Identifiers
//!
//! Class ids and branch ids are both small integers handed out to the
//! instrumentor. They are intentionally NOT interchangeable so a class id can
//! never be used to key the branch maps.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Dense identifier assigned to an instrumented class on first sight
///
/// Ids are handed out in insertion order: the first class seen is `0`, the
/// next `1`, and so on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ClassId(u32);

impl ClassId {
    /// Create a new class ID
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a conditional branch instruction, chosen by the instrumentor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct BranchId(u32);

impl BranchId {
    /// Create a new branch ID
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the inner value
    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl From<u32> for BranchId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
