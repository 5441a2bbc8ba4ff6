//! Two-bit branch side masks
//!
//! Bit 0 records that the *true* side of a branch was taken, bit 1 that the
//! *false* side was taken. Folding observations is a single OR and the
//! coverage count of a branch is the popcount of its mask.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which sides of one branch have been observed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SideMask(pub(crate) u8);

impl SideMask {
    /// No side observed
    pub const EMPTY: Self = Self(0b00);
    /// Only the true side observed
    pub const TRUE_SIDE: Self = Self(0b01);
    /// Only the false side observed
    pub const FALSE_SIDE: Self = Self(0b10);
    /// Both sides observed
    pub const BOTH: Self = Self(0b11);

    /// Mask for a single observation
    #[inline]
    #[must_use]
    pub const fn for_side(side: bool) -> Self {
        if side {
            Self::TRUE_SIDE
        } else {
            Self::FALSE_SIDE
        }
    }

    /// Build a mask from raw bits, rejecting anything outside `0b11`
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !Self::BOTH.0 == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Raw bits
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Union of two masks
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Number of sides set in `self` that are not set in `prior`
    #[inline]
    #[must_use]
    pub const fn newly_set(self, prior: Self) -> u32 {
        (self.0 & !prior.0).count_ones()
    }

    /// Number of sides observed (0, 1 or 2)
    #[inline]
    #[must_use]
    pub const fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// True side observed
    #[must_use]
    pub const fn has_true(self) -> bool {
        self.0 & Self::TRUE_SIDE.0 != 0
    }

    /// False side observed
    #[must_use]
    pub const fn has_false(self) -> bool {
        self.0 & Self::FALSE_SIDE.0 != 0
    }
}

impl fmt::Display for SideMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_maps_to_bit() {
        assert_eq!(SideMask::for_side(true).bits(), 1);
        assert_eq!(SideMask::for_side(false).bits(), 2);
    }

    #[test]
    fn test_union_accumulates_both_sides() {
        let mask = SideMask::TRUE_SIDE.union(SideMask::FALSE_SIDE);
        assert_eq!(mask, SideMask::BOTH);
        assert!(mask.has_true());
        assert!(mask.has_false());
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_newly_set_counts_only_fresh_sides() {
        assert_eq!(SideMask::BOTH.newly_set(SideMask::EMPTY), 2);
        assert_eq!(SideMask::BOTH.newly_set(SideMask::TRUE_SIDE), 1);
        assert_eq!(SideMask::TRUE_SIDE.newly_set(SideMask::BOTH), 0);
        assert_eq!(SideMask::FALSE_SIDE.newly_set(SideMask::TRUE_SIDE), 1);
    }

    #[test]
    fn test_from_bits_rejects_out_of_range() {
        assert_eq!(SideMask::from_bits(3), Some(SideMask::BOTH));
        assert_eq!(SideMask::from_bits(0), Some(SideMask::EMPTY));
        assert!(SideMask::from_bits(4).is_none());
        assert!(SideMask::from_bits(0xff).is_none());
    }
}
