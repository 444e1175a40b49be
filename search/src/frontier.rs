//! The frontier: discovered-but-unexpanded nodes, in one of three orders.
//!
//! The order is fixed when the frontier is built. Cheapest-first uses a
//! `BinaryHeap` keyed by `(cost, insertion sequence)`, which pops exactly
//! what a stable sort of the pending list by cost would put first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

use crate::node::NodeId;
use crate::policy::SearchOrder;

/// A cheapest-first entry.
///
/// `BinaryHeap` is a max-heap, so the key is wrapped in `Reverse` to pop the
/// lowest `(cost, seq)` first. `seq` is unique, so keys never tie.
#[derive(Debug)]
struct FrontierEntry<C> {
    key: Reverse<(C, u64)>,
    node: NodeId,
}

impl<C: Ord> PartialEq for FrontierEntry<C> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<C: Ord> Eq for FrontierEntry<C> {}

impl<C: Ord> PartialOrd for FrontierEntry<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Ord> Ord for FrontierEntry<C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

#[derive(Debug)]
enum Pending<C> {
    Oldest(VecDeque<NodeId>),
    Newest(Vec<NodeId>),
    Cheapest(BinaryHeap<FrontierEntry<C>>),
}

/// Pending nodes for one run.
///
/// May hold several nodes with equal states; duplicates are filtered by the
/// visited set when popped.
#[derive(Debug)]
pub struct Frontier<C> {
    pending: Pending<C>,
    next_seq: u64,
    high_water: usize,
}

impl<C: Ord> Frontier<C> {
    /// Create an empty frontier with the given ordering.
    #[must_use]
    pub fn new(order: SearchOrder) -> Self {
        let pending = match order {
            SearchOrder::BreadthFirst => Pending::Oldest(VecDeque::new()),
            SearchOrder::DepthFirst => Pending::Newest(Vec::new()),
            SearchOrder::CheapestFirst => Pending::Cheapest(BinaryHeap::new()),
        };
        Self {
            pending,
            next_seq: 0,
            high_water: 0,
        }
    }

    /// The ordering this frontier was built with.
    #[must_use]
    pub fn order(&self) -> SearchOrder {
        match self.pending {
            Pending::Oldest(_) => SearchOrder::BreadthFirst,
            Pending::Newest(_) => SearchOrder::DepthFirst,
            Pending::Cheapest(_) => SearchOrder::CheapestFirst,
        }
    }

    /// Insert a node. `cost` is only consulted by cheapest-first frontiers.
    pub fn push(&mut self, node: NodeId, cost: C) {
        let seq = self.next_seq;
        self.next_seq += 1;
        match &mut self.pending {
            Pending::Oldest(queue) => queue.push_back(node),
            Pending::Newest(stack) => stack.push(node),
            Pending::Cheapest(heap) => heap.push(FrontierEntry {
                key: Reverse((cost, seq)),
                node,
            }),
        }
        self.high_water = self.high_water.max(self.len());
    }

    /// Remove the next node per the ordering policy.
    pub fn pop(&mut self) -> Option<NodeId> {
        match &mut self.pending {
            Pending::Oldest(queue) => queue.pop_front(),
            Pending::Newest(stack) => stack.pop(),
            Pending::Cheapest(heap) => heap.pop().map(|entry| entry.node),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &self.pending {
            Pending::Oldest(queue) => queue.len(),
            Pending::Newest(stack) => stack.len(),
            Pending::Cheapest(heap) => heap.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}
