//! Transition descriptors.
//!
//! A transition is a small value describing one change to a state. The engine
//! never mutates a popped state: it clones it and applies the transition to
//! the copy (see [`successor`]).

/// One legal modification of a state.
///
/// Puzzles usually implement this on a tagged enum (`Board(i)`, `Leap(i)`),
/// which keeps moves inspectable. Any `Fn(&mut S)` closure also qualifies.
pub trait Transition<S> {
    /// Rewrite `state` in place into the successor.
    fn apply(&self, state: &mut S);
}

impl<S, F> Transition<S> for F
where
    F: Fn(&mut S),
{
    fn apply(&self, state: &mut S) {
        self(state);
    }
}

/// Apply `transition` to a fresh copy of `state` and return the copy.
#[must_use]
pub fn successor<S, T>(state: &S, transition: &T) -> S
where
    S: Clone,
    T: Transition<S> + ?Sized,
{
    let mut next = state.clone();
    transition.apply(&mut next);
    next
}
