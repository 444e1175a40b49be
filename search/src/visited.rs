//! The visited set: states already expanded in this run.
//!
//! Uses `BTreeSet` (not `HashSet`) so states only need `Ord`, and iteration
//! order is deterministic if the set is ever inspected. Grows monotonically.

use std::collections::BTreeSet;

/// States popped and expanded so far. Gates re-expansion, never insertion
/// into the frontier.
#[derive(Debug, Clone)]
pub struct VisitedSet<S> {
    states: BTreeSet<S>,
}

impl<S: Ord> VisitedSet<S> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            states: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.states.contains(state)
    }

    /// Record `state`. Returns `false` if it was already present.
    pub fn insert(&mut self, state: S) -> bool {
        self.states.insert(state)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl<S: Ord> Default for VisitedSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
