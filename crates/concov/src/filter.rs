//! Harness class suppression
//!
//! The harness ships its own support class that the instrumentor also sees.
//! Its branches must not count as user coverage, so registration of any class
//! matching a [`ClassFilter`] leaves the store's "new class" flag cleared.

use std::collections::BTreeSet;

/// Support class of the concolic harness
pub const DEFAULT_HARNESS_CLASS: &str = "catg/CATG";

/// Decides whether a class belongs to the harness rather than the program
/// under test
pub trait ClassFilter {
    /// Returns `true` when `class_name` must be excluded from coverage
    fn is_harness_class(&self, class_name: &str) -> bool;
}

impl<F> ClassFilter for F
where
    F: Fn(&str) -> bool,
{
    fn is_harness_class(&self, class_name: &str) -> bool {
        self(class_name)
    }
}

/// Filter matching an explicit set of class names
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarnessClasses {
    names: BTreeSet<String>,
}

impl HarnessClasses {
    /// Filter matching exactly the given names
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Filter that matches nothing
    #[must_use]
    pub fn none() -> Self {
        Self {
            names: BTreeSet::new(),
        }
    }

    /// Names matched by this filter
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

impl Default for HarnessClasses {
    fn default() -> Self {
        Self::new([DEFAULT_HARNESS_CLASS])
    }
}

impl ClassFilter for HarnessClasses {
    fn is_harness_class(&self, class_name: &str) -> bool {
        self.names.contains(class_name)
    }
}
