//! Commit summaries and the printed coverage line

use std::fmt;

/// Share of known branch sides observed, in percent
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct CoveragePercent(f64);

impl CoveragePercent {
    /// Percentage for `covered` of `branches` sides
    ///
    /// With no registered branches the percentage is `0.0`.
    #[must_use]
    pub fn of(covered: u64, branches: u64) -> Self {
        if branches == 0 {
            return Self(0.0);
        }
        Self(100.0 * covered as f64 / branches as f64)
    }

    /// Raw value
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

// Shortest round-trip float text, always with a fractional part ("50.0").
impl fmt::Display for CoveragePercent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

/// Outcome of folding one execution's observations into the durable record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommitSummary {
    /// Sides covered for the first time by this commit
    pub newly_covered: u64,
    /// Sides covered after this commit
    pub covered: u64,
    /// Sides known to exist after this commit
    pub branches: u64,
    /// Observations dropped because their branch was never registered
    pub discarded: usize,
}

impl CommitSummary {
    /// Coverage after this commit
    #[must_use]
    pub fn percent(&self) -> CoveragePercent {
        CoveragePercent::of(self.covered, self.branches)
    }

    /// Whether the commit covered anything new
    #[must_use]
    pub const fn made_progress(&self) -> bool {
        self.newly_covered > 0
    }
}

impl fmt::Display for CommitSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coverage {}%", self.percent())
    }
}
