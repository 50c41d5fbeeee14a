//! Core types for the merge driver.

use std::fmt;

/// The three-way merge scenario: ancestor, current (local) and other
/// (incoming) revisions, in the order git hands them to a driver.
#[derive(Debug, Clone)]
pub struct MergeScenario<T> {
    pub base: T,
    pub current: T,
    pub other: T,
}

impl<T> MergeScenario<T> {
    pub fn new(base: T, current: T, other: T) -> Self {
        Self {
            base,
            current,
            other,
        }
    }

    /// Borrow every revision, e.g. `MergeScenario<String>` -> `MergeScenario<&str>`.
    pub fn as_deref(&self) -> MergeScenario<&T::Target>
    where
        T: std::ops::Deref,
    {
        MergeScenario::new(&*self.base, &*self.current, &*self.other)
    }
}

/// Which rule picked the merged text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolutionStrategy {
    /// Only scheduling comments changed upstream; the local text is kept.
    KeepCurrent,
    /// Real content changed upstream; the incoming text replaces the local one.
    TakeOther,
}

impl fmt::Display for ResolutionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionStrategy::KeepCurrent => write!(f, "keep-current"),
            ResolutionStrategy::TakeOther => write!(f, "take-other"),
        }
    }
}

/// The text chosen for the merge result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub content: String,
    pub strategy: ResolutionStrategy,
    /// Lines of the local revision that differ from the chosen text.
    /// Always zero for [`ResolutionStrategy::KeepCurrent`].
    pub discarded_lines: usize,
}
