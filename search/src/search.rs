//! Search entry point and expansion loop.

use reach_kernel::space::{successor, StateSpace, Transition};

use crate::error::SearchError;
use crate::frontier::Frontier;
use crate::node::{NodeArena, NodeId};
use crate::observer::{NoopObserver, SearchObserver};
use crate::policy::{SearchOrder, SearchPolicy};
use crate::visited::VisitedSet;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// A popped state satisfied the goal.
    GoalReached { node_id: u64 },
    /// The frontier emptied; every reachable state was expanded once.
    FrontierExhausted,
    /// `max_expansions` was reached before a goal was popped.
    ExpansionBudgetExceeded,
    /// `max_nodes` was reached before a goal was popped.
    NodeBudgetExceeded,
}

impl TerminationReason {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
            Self::NodeBudgetExceeded => "node_budget_exceeded",
        }
    }
}

/// Counters for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStats {
    /// Nodes removed from the frontier.
    pub pops: u64,
    /// Nodes expanded (states added to the visited set).
    pub expansions: u64,
    /// Popped nodes skipped because their state was already expanded.
    pub duplicates_skipped: u64,
    /// Candidate states discarded by the invariant.
    pub invariant_rejections: u64,
    /// Nodes created, root included.
    pub nodes_created: u64,
    /// Largest frontier size observed.
    pub frontier_high_water: u64,
}

/// Result of a search execution.
///
/// An empty `trace` means no goal was reached; check `termination` for why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome<S, C> {
    /// States from start to goal, inclusive.
    pub trace: Vec<S>,
    /// Cumulative cost of the goal node.
    pub goal_cost: Option<C>,
    /// The order the run actually used.
    pub order: SearchOrder,
    pub termination: TerminationReason,
    pub stats: SearchStats,
}

impl<S, C> SearchOutcome<S, C> {
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        matches!(self.termination, TerminationReason::GoalReached { .. })
    }

    /// Number of transitions in the trace (0 when no goal was reached).
    #[must_use]
    pub fn transitions(&self) -> usize {
        self.trace.len().saturating_sub(1)
    }
}

/// Explore `space` until a state satisfying `goal` is popped.
///
/// Every run owns its own frontier, visited set and node arena; `space` is
/// only read, so concurrent runs may share it.
///
/// # Loop
///
/// 1. Pop per the effective order.
/// 2. Cheapest-first only: drop a non-root state failing the invariant.
/// 3. Goal test; on success reconstruct the trace from parent links.
/// 4. Skip states already expanded (first-discovered wins).
/// 5. Expand: apply each transition to a copy, drop invalid successors,
///    enqueue the rest in generation order. A successor's cost is derived
///    from its parent's cost only; a cheaper route found later to a state
///    already queued or expanded does not re-prioritize or re-open it.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight policy validation failures.
/// Exhaustion and budgets terminate normally with an empty trace.
pub fn run<S, T, C, G>(
    space: &StateSpace<S, T, C>,
    goal: G,
    policy: &SearchPolicy,
    observer: &mut dyn SearchObserver<S, C>,
) -> Result<SearchOutcome<S, C>, SearchError>
where
    S: Clone + Ord,
    T: Transition<S>,
    C: Clone + Ord,
    G: Fn(&S) -> bool,
{
    policy.validate(space.is_cost_enabled())?;
    let order = policy.effective_order(space.is_cost_enabled());

    let mut arena: NodeArena<S, C> = NodeArena::new();
    let mut frontier = Frontier::new(order);
    let mut visited = VisitedSet::new();
    let mut stats = SearchStats::default();
    let mut goal_node: Option<NodeId> = None;

    let root = arena.push_root(space.start().clone(), space.initial_cost().clone());
    frontier.push(root, space.initial_cost().clone());
    stats.nodes_created = 1;

    let termination = 'search: loop {
        let Some(id) = frontier.pop() else {
            break TerminationReason::FrontierExhausted;
        };
        stats.pops += 1;
        let node = arena.get(id);
        observer.popped(id, node);

        // Second invariant pass. Successors were filtered at generation, so
        // this only matters if the invariant is not pure.
        if order == SearchOrder::CheapestFirst
            && node.parent.is_some()
            && !space.is_valid(&node.state)
        {
            stats.invariant_rejections += 1;
            observer.invalid_on_pop(id, node);
            continue;
        }

        if goal(&node.state) {
            observer.goal_reached(id, node);
            goal_node = Some(id);
            break TerminationReason::GoalReached {
                node_id: id.as_u64(),
            };
        }

        if visited.contains(&node.state) {
            stats.duplicates_skipped += 1;
            observer.duplicate(id, node);
            continue;
        }

        if policy.max_expansions.is_some_and(|max| stats.expansions >= max) {
            break TerminationReason::ExpansionBudgetExceeded;
        }

        let state = node.state.clone();
        let parent_cost = node.cost.clone();
        visited.insert(state.clone());
        stats.expansions += 1;

        let transitions = space.transitions(&state);
        let mut enqueued = 0usize;
        for transition in &transitions {
            let next = successor(&state, transition);
            if !space.is_valid(&next) {
                stats.invariant_rejections += 1;
                observer.rejected(id, &next);
                continue;
            }
            if policy.max_nodes.is_some_and(|max| stats.nodes_created >= max) {
                observer.expanded(id, transitions.len(), enqueued);
                break 'search TerminationReason::NodeBudgetExceeded;
            }
            let cost = space.cost_of(&next, &parent_cost);
            let child = arena.push_child(id, next, cost.clone());
            stats.nodes_created += 1;
            frontier.push(child, cost);
            observer.enqueued(child, arena.get(child));
            enqueued += 1;
        }
        observer.expanded(id, transitions.len(), enqueued);
    };

    stats.frontier_high_water = frontier.high_water() as u64;
    observer.finished(order, &termination, &stats);

    let (trace, goal_cost) = match goal_node {
        Some(id) => (arena.trace(id), Some(arena.get(id).cost.clone())),
        None => (Vec::new(), None),
    };

    Ok(SearchOutcome {
        trace,
        goal_cost,
        order,
        termination,
        stats,
    })
}

/// The query surface puzzles use: `space.search(goal, order)`.
pub trait Reachability<S> {
    /// Return one witness path from the start to a state satisfying `goal`,
    /// or an empty vector if none is reachable.
    ///
    /// `order` is ignored on cost-enabled descriptors, which always search
    /// cheapest-first.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::UnsupportedOrder`] for cheapest-first on a
    /// descriptor without a cost function.
    fn search<G>(&self, goal: G, order: SearchOrder) -> Result<Vec<S>, SearchError>
    where
        G: Fn(&S) -> bool;
}

impl<S, T, C> Reachability<S> for StateSpace<S, T, C>
where
    S: Clone + Ord,
    T: Transition<S>,
    C: Clone + Ord,
{
    fn search<G>(&self, goal: G, order: SearchOrder) -> Result<Vec<S>, SearchError>
    where
        G: Fn(&S) -> bool,
    {
        let policy = SearchPolicy::with_order(order);
        run(self, goal, &policy, &mut NoopObserver).map(|outcome| outcome.trace)
    }
}
