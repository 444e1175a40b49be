//! Puzzle scenarios end to end: expected witness traces, replay of every
//! trace, and the engine's structural guarantees on real puzzles.

use std::collections::BTreeSet;

use reach_kernel::proof::replay::{replay_verify, ReplayError};
use reach_kernel::space::{StateSpace, Transition};
use reach_puzzles::crossing::{self, Actors};
use reach_puzzles::family::{self, CostModel, Dock, Family};
use reach_puzzles::frogs::{self, Stones};
use reach_search::{
    run, NoopObserver, Reachability, SearchOrder, SearchPolicy, TerminationReason,
};

fn render<S: ToString>(trace: &[S]) -> Vec<String> {
    trace.iter().map(ToString::to_string).collect()
}

/// Every state reachable from the start through valid successors.
fn reachable<S, T, C>(space: &StateSpace<S, T, C>) -> BTreeSet<S>
where
    S: Clone + Ord,
    T: Transition<S>,
{
    let mut seen = BTreeSet::from([space.start().clone()]);
    let mut pending = vec![space.start().clone()];
    while let Some(state) = pending.pop() {
        for (_, next) in space.successors(&state) {
            if seen.insert(next.clone()) {
                pending.push(next);
            }
        }
    }
    seen
}

// ---------------------------------------------------------------------------
// Crossing
// ---------------------------------------------------------------------------

#[test]
fn crossing_breadth_first_trace() {
    let trace = crossing::state_space()
        .search(crossing::is_goal, SearchOrder::BreadthFirst)
        .unwrap();
    assert_eq!(
        render(&trace),
        ["111", "1~1", "121", "~21", "221", "2~1", "211", "21~", "212", "2~2", "222"]
    );
}

#[test]
fn crossing_unreachable_goal_exhausts_every_state_once() {
    let space = crossing::state_space();
    let never = |_: &Actors| false;
    let outcome = run(&space, never, &SearchPolicy::default(), &mut NoopObserver).unwrap();
    assert!(outcome.trace.is_empty());
    assert_eq!(outcome.termination, TerminationReason::FrontierExhausted);
    assert_eq!(outcome.stats.expansions, reachable(&space).len() as u64);
}

// ---------------------------------------------------------------------------
// Frogs
// ---------------------------------------------------------------------------

#[test]
fn frogs_two_breadth_and_depth_first() {
    let space = frogs::state_space(2);
    let finish = Stones::finish(2);
    let goal = |s: &Stones| *s == finish;

    assert_eq!(
        render(&space.search(goal, SearchOrder::BreadthFirst).unwrap()),
        ["GG_BB", "G_GBB", "GBG_B", "GBGB_", "GB_BG", "_BGBG", "B_GBG", "BBG_G", "BB_GG"]
    );
    assert_eq!(
        render(&space.search(goal, SearchOrder::DepthFirst).unwrap()),
        ["GG_BB", "GGB_B", "G_BGB", "_GBGB", "BG_GB", "BGBG_", "BGB_G", "B_BGG", "BB_GG"]
    );
}

#[test]
fn frogs_need_n_squared_plus_2n_leaps() {
    for n in 1..=5 {
        let space = frogs::state_space(n);
        let finish = Stones::finish(n);
        let goal = |s: &Stones| *s == finish;
        for order in [SearchOrder::BreadthFirst, SearchOrder::DepthFirst] {
            let trace = space.search(goal, order).unwrap();
            assert_eq!(trace.len(), n * n + 2 * n + 1, "n={n} {order}");
            assert_eq!(replay_verify(&space, &trace, goal), Ok(()), "n={n} {order}");
        }
    }
}

#[test]
fn breadth_first_is_never_longer_than_depth_first() {
    let space = crossing::state_space();
    let bfs = space.search(crossing::is_goal, SearchOrder::BreadthFirst).unwrap();
    let dfs = space.search(crossing::is_goal, SearchOrder::DepthFirst).unwrap();
    assert!(bfs.len() <= dfs.len());
}

#[test]
fn unsolvable_row_returns_empty_trace() {
    // Browns already left of the gap: no leap exists.
    let space = StateSpace::new(Stones::finish(2), frogs::transitions);
    let start = Stones::start(2);
    let trace = space
        .search(|s: &Stones| *s == start, SearchOrder::DepthFirst)
        .unwrap();
    assert!(trace.is_empty());
}

// ---------------------------------------------------------------------------
// Family
// ---------------------------------------------------------------------------

#[test]
fn family_solutions_replay_and_respect_rules() {
    for model in CostModel::ALL {
        let space = family::state_space(model);
        let trace = space
            .search(family::is_goal, SearchOrder::CheapestFirst)
            .unwrap();
        assert_eq!(replay_verify(&space, &trace, family::is_goal), Ok(()), "{model}");
        assert!(trace[1..].iter().all(|s| family::check(s).is_ok()), "{model}");
        assert!(trace.iter().all(|s| s.boat.passengers <= s.boat.capacity));
    }
}

#[test]
fn family_depth_cost_matches_breadth_first_length() {
    // Depth cost grows by one per transition, so cheapest-first with ties
    // by insertion order explores exactly like breadth-first.
    let depth = family::state_space(CostModel::Depth);
    let cost_trace = depth
        .search(family::is_goal, SearchOrder::CheapestFirst)
        .unwrap();

    let plain = StateSpace::new(Family::default(), family::transitions).with_invariant(family::is_valid);
    let bfs_trace = plain
        .search(family::is_goal, SearchOrder::BreadthFirst)
        .unwrap();

    assert_eq!(cost_trace, bfs_trace);
}

#[test]
fn family_goal_cost_counts_transitions() {
    let outcome = run(
        &family::state_space(CostModel::Depth),
        family::is_goal,
        &SearchPolicy::default(),
        &mut NoopObserver,
    )
    .unwrap();
    let cost = outcome.goal_cost.unwrap();
    assert_eq!(cost.depth, outcome.transitions() as u64);
    assert_eq!(cost.noise, 0);
}

#[test]
fn family_boat_never_travels_empty() {
    let trace = family::state_space(CostModel::Noise2)
        .search(family::is_goal, SearchOrder::CheapestFirst)
        .unwrap();
    for state in trace.iter().filter(|s| s.boat.dock == Dock::Travel) {
        assert!((1..=2).contains(&state.boat.passengers), "{state}");
    }
    assert_eq!(trace.last().map(|s| s.boat.dock), Some(Dock::Shore2));
}

// ---------------------------------------------------------------------------
// Replay divergence on real traces
// ---------------------------------------------------------------------------

#[test]
fn tampered_traces_fail_replay() {
    let space = crossing::state_space();
    let trace = space
        .search(crossing::is_goal, SearchOrder::BreadthFirst)
        .unwrap();

    let mut skipped = trace.clone();
    skipped.remove(3);
    assert_eq!(
        replay_verify(&space, &skipped, crossing::is_goal),
        Err(ReplayError::UnreachableStep { index: 3 })
    );

    let truncated = &trace[..trace.len() - 1];
    assert!(matches!(
        replay_verify(&space, truncated, crossing::is_goal),
        Err(ReplayError::GoalNotSatisfied { .. })
    ));

    assert_eq!(
        replay_verify(&space, &trace[1..], crossing::is_goal),
        Err(ReplayError::StartMismatch)
    );
}
