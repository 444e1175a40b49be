//! Runner: solve a named puzzle under a policy and collect everything a
//! caller might want to print, hash or persist.
//!
//! # Pipeline
//!
//! ```text
//! policy.validate() → run() with LogObserver (+ GraphRecorder)
//!   → replay_verify() on the trace → trace_digest()
//! ```

use std::fmt::{Debug, Display};

use reach_kernel::proof::canon::CanonError;
use reach_kernel::proof::hash::ContentHash;
use reach_kernel::proof::replay::{replay_verify, ReplayError};
use reach_kernel::proof::trace::{trace_digest, TraceError};
use reach_kernel::space::{StateSpace, Transition};
use reach_search::{
    run, GraphRecorder, LogObserver, SearchError, SearchGraph, SearchOrder, SearchPolicy,
    SearchStats, Tee, TerminationReason,
};
use serde::Serialize;

use crate::error::PuzzleError;
use crate::family::CostModel;
use crate::{crossing, family, frogs};

/// A puzzle instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Puzzle {
    Crossing,
    /// Leaping frogs with this many frogs per colour.
    Frogs(usize),
    Family(CostModel),
}

impl Puzzle {
    /// Resolve a puzzle name. `frogs` and `cost` only apply to the puzzle
    /// that uses them.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::UnknownPuzzle`] for any other name.
    pub fn parse(name: &str, frogs: usize, cost: CostModel) -> Result<Self, PuzzleError> {
        match name {
            "crossing" => Ok(Self::Crossing),
            "frogs" => Ok(Self::Frogs(frogs)),
            "family" => Ok(Self::Family(cost)),
            other => Err(PuzzleError::UnknownPuzzle {
                name: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Crossing => "crossing",
            Self::Frogs(_) => "frogs",
            Self::Family(_) => "family",
        }
    }
}

/// Error during a puzzle run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunError {
    /// The policy was rejected before the search started.
    Search(SearchError),
    /// Binding the graph to the policy digest failed.
    CanonFailed(CanonError),
    /// Hashing the trace failed.
    TraceFailed(TraceError),
    /// The engine returned a trace that does not replay.
    ReplayFailed(ReplayError),
}

impl std::fmt::Display for RunError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Search(e) => write!(f, "{e}"),
            Self::CanonFailed(e) => write!(f, "canonical JSON error: {e}"),
            Self::TraceFailed(e) => write!(f, "trace digest error: {e}"),
            Self::ReplayFailed(e) => write!(f, "solution does not replay: {e}"),
        }
    }
}

impl std::error::Error for RunError {}

impl From<SearchError> for RunError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

/// What one run produced.
#[derive(Debug, Clone)]
pub struct Solution {
    pub puzzle: &'static str,
    /// Rendered states, start to goal; empty if no goal was reached.
    pub states: Vec<String>,
    /// Rendered cumulative cost of the goal, for cost-enabled puzzles.
    pub goal_cost: Option<String>,
    pub trace_digest: ContentHash,
    pub order: SearchOrder,
    pub termination: TerminationReason,
    pub stats: SearchStats,
    /// Present when the request asked for one.
    pub graph: Option<SearchGraph>,
}

impl Solution {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        !self.states.is_empty()
    }

    /// One `step: state` line per state.
    #[must_use]
    pub fn render(&self) -> String {
        self.states
            .iter()
            .enumerate()
            .map(|(step, state)| format!("{step}: {state}\n"))
            .collect()
    }
}

/// Solve `puzzle` under `policy`, recording a [`SearchGraph`] if asked.
///
/// Cost-enabled puzzles (family) always run cheapest-first; asking for any
/// other order is not an error there.
///
/// # Errors
///
/// Returns [`RunError`] if the policy is invalid for the puzzle or any
/// post-run check fails.
pub fn solve(puzzle: Puzzle, policy: &SearchPolicy, record_graph: bool) -> Result<Solution, RunError> {
    log::info!("solving {} with {}", puzzle.name(), policy.order);
    match puzzle {
        Puzzle::Crossing => solve_space(
            puzzle.name(),
            &crossing::state_space(),
            crossing::is_goal,
            |_: &()| None,
            policy,
            record_graph,
        ),
        Puzzle::Frogs(n) => {
            let finish = frogs::Stones::finish(n);
            solve_space(
                puzzle.name(),
                &frogs::state_space(n),
                move |s: &frogs::Stones| *s == finish,
                |_: &()| None,
                policy,
                record_graph,
            )
        }
        Puzzle::Family(model) => {
            // The order is implied by the cost function.
            let policy = SearchPolicy {
                order: SearchOrder::CheapestFirst,
                ..policy.clone()
            };
            solve_space(
                puzzle.name(),
                &family::state_space(model),
                family::is_goal,
                |cost: &family::Cost| Some(cost.to_string()),
                &policy,
                record_graph,
            )
        }
    }
}

fn solve_space<S, T, C, G, R>(
    name: &'static str,
    space: &StateSpace<S, T, C>,
    goal: G,
    render_cost: R,
    policy: &SearchPolicy,
    record_graph: bool,
) -> Result<Solution, RunError>
where
    S: Clone + Ord + Debug + Display + Serialize,
    T: Transition<S>,
    C: Clone + Ord + Debug,
    G: Fn(&S) -> bool,
    R: Fn(&C) -> Option<String>,
{
    let (outcome, graph) = if record_graph {
        let recorder = GraphRecorder::for_policy(policy).map_err(RunError::CanonFailed)?;
        let mut observer = Tee::new(LogObserver, recorder);
        let outcome = run(space, &goal, policy, &mut observer)?;
        (outcome, observer.second.into_graph())
    } else {
        (run(space, &goal, policy, &mut LogObserver)?, None)
    };

    if outcome.is_goal_reached() {
        replay_verify(space, &outcome.trace, &goal).map_err(RunError::ReplayFailed)?;
    }
    let digest = trace_digest(&outcome.trace).map_err(RunError::TraceFailed)?;

    log::info!(
        "{name}: {} after {} expansions, {} states in trace",
        outcome.termination.as_str(),
        outcome.stats.expansions,
        outcome.trace.len()
    );

    Ok(Solution {
        puzzle: name,
        states: outcome.trace.iter().map(ToString::to_string).collect(),
        goal_cost: outcome.goal_cost.as_ref().and_then(render_cost),
        trace_digest: digest,
        order: outcome.order,
        termination: outcome.termination,
        stats: outcome.stats,
        graph,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names() {
        assert_eq!(
            Puzzle::parse("frogs", 3, CostModel::Depth),
            Ok(Puzzle::Frogs(3))
        );
        assert_eq!(
            Puzzle::parse("family", 2, CostModel::Noise1),
            Ok(Puzzle::Family(CostModel::Noise1))
        );
        assert!(matches!(
            Puzzle::parse("sudoku", 2, CostModel::Depth),
            Err(PuzzleError::UnknownPuzzle { .. })
        ));
    }

    #[test]
    fn crossing_renders_steps() {
        let solution = solve(Puzzle::Crossing, &SearchPolicy::default(), false).unwrap();
        assert!(solution.is_solved());
        assert!(solution.render().starts_with("0: 111\n1: 1~1\n"));
        assert!(solution.render().ends_with("10: 222\n"));
        assert!(solution.graph.is_none());
        assert!(solution.goal_cost.is_none());
    }

    #[test]
    fn family_ignores_requested_order() {
        let policy = SearchPolicy::with_order(SearchOrder::DepthFirst);
        let solution = solve(Puzzle::Family(CostModel::Depth), &policy, false).unwrap();
        assert_eq!(solution.order, SearchOrder::CheapestFirst);
        assert!(solution.goal_cost.is_some());
    }

    #[test]
    fn cheapest_first_on_frogs_is_an_error() {
        let policy = SearchPolicy::with_order(SearchOrder::CheapestFirst);
        let err = solve(Puzzle::Frogs(2), &policy, false).unwrap_err();
        assert!(matches!(err, RunError::Search(SearchError::UnsupportedOrder { .. })));
    }

    #[test]
    fn graph_is_recorded_on_request() {
        let solution = solve(Puzzle::Frogs(2), &SearchPolicy::default(), true).unwrap();
        let graph = solution.graph.unwrap();
        assert_eq!(graph.metadata.total_expansions, solution.stats.expansions);
        assert!(graph.metadata.search_policy_digest.is_some());
    }

    #[test]
    fn budget_leaves_unsolved() {
        let policy = SearchPolicy {
            max_expansions: Some(3),
            ..SearchPolicy::default()
        };
        let solution = solve(Puzzle::Frogs(3), &policy, false).unwrap();
        assert!(!solution.is_solved());
        assert_eq!(solution.termination, TerminationReason::ExpansionBudgetExceeded);
        assert_eq!(solution.render(), "");
    }
}
