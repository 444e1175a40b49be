//! Shared helpers for reach benchmark suites.
//!
//! A regime is a puzzle instance plus a policy. Every suite runs the same
//! regimes two ways: the bare engine (`run` with a no-op observer) and the
//! full runner (logging observer, graph recording, replay and digest).

use reach_puzzles::family::{self, CostModel};
use reach_puzzles::frogs::{self, Stones};
use reach_puzzles::{crossing, solve, Puzzle, Solution};
use reach_search::{run, NoopObserver, SearchOrder, SearchOutcome, SearchPolicy, SearchStats};

/// A named benchmark workload.
#[derive(Debug, Clone)]
pub struct Regime {
    pub name: &'static str,
    pub puzzle: Puzzle,
    pub policy: SearchPolicy,
}

fn regime(name: &'static str, puzzle: Puzzle, order: SearchOrder) -> Regime {
    Regime {
        name,
        puzzle,
        policy: SearchPolicy::with_order(order),
    }
}

/// All regimes, smallest first.
#[must_use]
pub fn regimes() -> Vec<Regime> {
    vec![
        regime("crossing_bfs", Puzzle::Crossing, SearchOrder::BreadthFirst),
        regime("frogs4_bfs", Puzzle::Frogs(4), SearchOrder::BreadthFirst),
        regime("frogs4_dfs", Puzzle::Frogs(4), SearchOrder::DepthFirst),
        regime("family_depth", Puzzle::Family(CostModel::Depth), SearchOrder::CheapestFirst),
        regime("family_noise1", Puzzle::Family(CostModel::Noise1), SearchOrder::CheapestFirst),
        Regime {
            name: "frogs8_budget_limited",
            puzzle: Puzzle::Frogs(8),
            policy: SearchPolicy {
                max_expansions: Some(2_000),
                ..SearchPolicy::default()
            },
        },
    ]
}

fn stats<S, C>(outcome: SearchOutcome<S, C>) -> SearchStats {
    outcome.stats
}

/// Run the engine alone on `regime` and return its counters.
///
/// # Panics
///
/// Panics if the regime's policy is invalid for its puzzle. Benchmark setup
/// failures are fatal.
#[must_use]
pub fn run_engine_only(regime: &Regime) -> SearchStats {
    let policy = &regime.policy;
    let result = match regime.puzzle {
        Puzzle::Crossing => run(
            &crossing::state_space(),
            crossing::is_goal,
            policy,
            &mut NoopObserver,
        )
        .map(stats),
        Puzzle::Frogs(n) => {
            let finish = Stones::finish(n);
            run(
                &frogs::state_space(n),
                |s: &Stones| *s == finish,
                policy,
                &mut NoopObserver,
            )
            .map(stats)
        }
        Puzzle::Family(model) => run(
            &family::state_space(model),
            family::is_goal,
            policy,
            &mut NoopObserver,
        )
        .map(stats),
    };
    result.unwrap_or_else(|e| panic!("{}: {e}", regime.name))
}

/// Run the full runner pipeline on `regime`, recording the search graph.
///
/// # Panics
///
/// Panics if the run fails.
#[must_use]
pub fn run_with_artifacts(regime: &Regime) -> Solution {
    solve(regime.puzzle, &regime.policy, true).unwrap_or_else(|e| panic!("{}: {e}", regime.name))
}
