//! `replay_verify()`: check a trace against the descriptor that produced it.
//!
//! Replay re-derives every step: the first state must be the start state,
//! each next state must be the result of some transition the generator offers
//! for its predecessor, every state after the start must satisfy the
//! invariant, and the last state must satisfy the goal.

use crate::space::{successor, StateSpace, Transition};

/// The first way in which a trace fails to replay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    /// The trace has no states.
    EmptyTrace,
    /// `trace[0]` is not the descriptor's start state.
    StartMismatch,
    /// No transition of `trace[index - 1]` produces `trace[index]`.
    UnreachableStep { index: usize },
    /// `trace[index]` fails the invariant predicate.
    InvariantViolated { index: usize },
    /// The final state does not satisfy the goal.
    GoalNotSatisfied { index: usize },
}

impl std::fmt::Display for ReplayError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTrace => write!(f, "trace is empty"),
            Self::StartMismatch => write!(f, "trace does not begin at the start state"),
            Self::UnreachableStep { index } => {
                write!(f, "state {index} is not a successor of state {}", index - 1)
            }
            Self::InvariantViolated { index } => {
                write!(f, "state {index} violates the invariant")
            }
            Self::GoalNotSatisfied { index } => {
                write!(f, "final state {index} does not satisfy the goal")
            }
        }
    }
}

impl std::error::Error for ReplayError {}

/// Verify that `trace` is a witness path from the start of `space` to `goal`.
///
/// The start state is never invariant-checked.
///
/// # Errors
///
/// Returns the first [`ReplayError`] encountered, scanning front to back.
pub fn replay_verify<S, T, C, G>(
    space: &StateSpace<S, T, C>,
    trace: &[S],
    goal: G,
) -> Result<(), ReplayError>
where
    S: Clone + PartialEq,
    T: Transition<S>,
    G: Fn(&S) -> bool,
{
    let (first, _) = trace.split_first().ok_or(ReplayError::EmptyTrace)?;
    if first != space.start() {
        return Err(ReplayError::StartMismatch);
    }

    for (offset, pair) in trace.windows(2).enumerate() {
        let index = offset + 1;
        let (prev, next) = (&pair[0], &pair[1]);
        let produced = space
            .transitions(prev)
            .iter()
            .any(|t| successor(prev, t) == *next);
        if !produced {
            return Err(ReplayError::UnreachableStep { index });
        }
        if !space.is_valid(next) {
            return Err(ReplayError::InvariantViolated { index });
        }
    }

    let last = trace.len() - 1;
    if !goal(&trace[last]) {
        return Err(ReplayError::GoalNotSatisfied { index: last });
    }
    Ok(())
}
