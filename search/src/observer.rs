//! Observation hooks for the expansion loop.
//!
//! The engine never logs on its own. Every decision is reported to the
//! observer passed to [`crate::search::run`]; what happens with it (nothing,
//! an audit graph, `log` records) is up to the caller.

use std::fmt::Debug;

use crate::node::{NodeId, SearchNode};
use crate::policy::SearchOrder;
use crate::search::{SearchStats, TerminationReason};

/// Receives search events in the order the engine makes decisions.
///
/// All hooks default to no-ops.
pub trait SearchObserver<S, C> {
    /// A node left the frontier.
    fn popped(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {}

    /// A popped non-root node failed the cheapest-first invariant re-check.
    fn invalid_on_pop(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {}

    /// A popped node satisfied the goal. No further events follow except
    /// [`SearchObserver::finished`].
    fn goal_reached(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {}

    /// A popped node was skipped because its state was already expanded.
    fn duplicate(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {}

    /// A successor of `parent` failed the invariant and was discarded.
    fn rejected(&mut self, _parent: NodeId, _state: &S) {}

    /// A successor was added to the frontier.
    fn enqueued(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {}

    /// Expansion of `id` is complete: `generated` transitions were offered,
    /// `enqueued` successors survived the invariant.
    fn expanded(&mut self, _id: NodeId, _generated: usize, _enqueued: usize) {}

    /// The run is over.
    fn finished(
        &mut self,
        _order: SearchOrder,
        _termination: &TerminationReason,
        _stats: &SearchStats,
    ) {
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl<S, C> SearchObserver<S, C> for NoopObserver {}

/// Forwards events to the `log` facade under the `reach_search` target.
///
/// Per-node events go to `trace!`, expansions and the summary to `debug!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl<S: Debug, C: Debug> SearchObserver<S, C> for LogObserver {
    fn popped(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        log::trace!(
            "pop {id} depth={} cost={:?} state={:?}",
            node.depth,
            node.cost,
            node.state
        );
    }

    fn invalid_on_pop(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        log::debug!("drop {id}: invariant fails on pop, state={:?}", node.state);
    }

    fn goal_reached(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        log::debug!(
            "goal at {id} depth={} cost={:?} state={:?}",
            node.depth,
            node.cost,
            node.state
        );
    }

    fn duplicate(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        log::trace!("skip {id}: already expanded {:?}", node.state);
    }

    fn rejected(&mut self, parent: NodeId, state: &S) {
        log::trace!("reject successor of {parent}: {state:?}");
    }

    fn enqueued(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        log::trace!("push {id} cost={:?} state={:?}", node.cost, node.state);
    }

    fn expanded(&mut self, id: NodeId, generated: usize, enqueued: usize) {
        log::debug!("expand {id}: {generated} transitions, {enqueued} enqueued");
    }

    fn finished(&mut self, order: SearchOrder, termination: &TerminationReason, stats: &SearchStats) {
        log::debug!(
            "{order} search finished ({}): pops={} expansions={} duplicates={} rejected={} nodes={} high_water={}",
            termination.as_str(),
            stats.pops,
            stats.expansions,
            stats.duplicates_skipped,
            stats.invariant_rejections,
            stats.nodes_created,
            stats.frontier_high_water,
        );
    }
}

/// Fans every event out to two observers, `first` before `second`.
#[derive(Debug)]
pub struct Tee<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Tee<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<S, C, A, B> SearchObserver<S, C> for Tee<A, B>
where
    A: SearchObserver<S, C>,
    B: SearchObserver<S, C>,
{
    fn popped(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.first.popped(id, node);
        self.second.popped(id, node);
    }

    fn invalid_on_pop(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.first.invalid_on_pop(id, node);
        self.second.invalid_on_pop(id, node);
    }

    fn goal_reached(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.first.goal_reached(id, node);
        self.second.goal_reached(id, node);
    }

    fn duplicate(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.first.duplicate(id, node);
        self.second.duplicate(id, node);
    }

    fn rejected(&mut self, parent: NodeId, state: &S) {
        self.first.rejected(parent, state);
        self.second.rejected(parent, state);
    }

    fn enqueued(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.first.enqueued(id, node);
        self.second.enqueued(id, node);
    }

    fn expanded(&mut self, id: NodeId, generated: usize, enqueued: usize) {
        self.first.expanded(id, generated, enqueued);
        self.second.expanded(id, generated, enqueued);
    }

    fn finished(&mut self, order: SearchOrder, termination: &TerminationReason, stats: &SearchStats) {
        self.first.finished(order, termination, stats);
        self.second.finished(order, termination, stats);
    }
}
