//! `SearchGraph`: expansion-event audit log.
//!
//! The normative surface is the ordered list of [`ExpandEvent`]s. Two runs
//! over the same descriptor with the same policy produce byte-identical
//! canonical JSON, so the graph digest doubles as a determinism lock.

use reach_kernel::proof::canon::{canonical_json_bytes, CanonError};
use reach_kernel::proof::hash::{canonical_hash, ContentHash};
use reach_kernel::proof::hash_domain::HashDomain;

use crate::node::{NodeId, SearchNode};
use crate::observer::SearchObserver;
use crate::policy::{SearchOrder, SearchPolicy};
use crate::search::{SearchStats, TerminationReason};

/// The complete audit trail of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraph {
    /// Expansions in the order they happened.
    pub expansions: Vec<ExpandEvent>,
    pub metadata: SearchGraphMetadata,
}

/// One popped node that was actually expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpandEvent {
    /// Position in the expansion sequence, from 0.
    pub expansion_order: u64,
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub depth: u32,
    /// Successors in generation order.
    pub successors: Vec<SuccessorRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuccessorRecord {
    /// Index in the generator's output.
    pub index: u64,
    pub outcome: SuccessorOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuccessorOutcome {
    /// Added to the frontier as node `to_node`.
    Enqueued { to_node: u64 },
    /// Discarded by the invariant.
    RejectedByInvariant,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchGraphMetadata {
    pub order: SearchOrder,
    /// Digest of the policy the run was configured with, if known.
    pub search_policy_digest: Option<String>,
    pub termination_reason: TerminationReason,
    pub goal_node: Option<u64>,
    /// Nodes dropped by the cheapest-first invariant re-check when popped,
    /// in pop order. Also counted in `total_invariant_rejections`.
    pub rejected_on_pop: Vec<u64>,

    // Counters
    pub total_pops: u64,
    pub total_expansions: u64,
    pub total_duplicates_skipped: u64,
    pub total_invariant_rejections: u64,
    pub total_nodes_created: u64,
    pub frontier_high_water: u64,
}

impl SearchGraph {
    /// Canonical JSON bytes of the whole graph.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json())
    }

    /// Content hash of the canonical JSON under [`HashDomain::SearchGraph`].
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if canonicalization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
        })
    }
}

fn expand_event_to_json(e: &ExpandEvent) -> serde_json::Value {
    serde_json::json!({
        "depth": e.depth,
        "expansion_order": e.expansion_order,
        "node_id": e.node_id,
        "parent_id": e.parent_id,
        "successors": e.successors.iter().map(successor_to_json).collect::<Vec<_>>(),
    })
}

fn successor_to_json(r: &SuccessorRecord) -> serde_json::Value {
    let outcome = match r.outcome {
        SuccessorOutcome::Enqueued { to_node } => {
            serde_json::json!({"to_node": to_node, "type": "enqueued"})
        }
        SuccessorOutcome::RejectedByInvariant => {
            serde_json::json!({"type": "rejected_by_invariant"})
        }
    };
    serde_json::json!({"index": r.index, "outcome": outcome})
}

fn termination_reason_to_json(t: &TerminationReason) -> serde_json::Value {
    match t {
        TerminationReason::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": t.as_str()})
        }
        _ => serde_json::json!({"type": t.as_str()}),
    }
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "frontier_high_water": m.frontier_high_water,
        "goal_node": m.goal_node,
        "order": m.order.as_str(),
        "rejected_on_pop": m.rejected_on_pop,
        "search_policy_digest": m.search_policy_digest,
        "termination_reason": termination_reason_to_json(&m.termination_reason),
        "total_duplicates_skipped": m.total_duplicates_skipped,
        "total_expansions": m.total_expansions,
        "total_invariant_rejections": m.total_invariant_rejections,
        "total_nodes_created": m.total_nodes_created,
        "total_pops": m.total_pops,
    })
}

// ---------------------------------------------------------------------------
// Recorder
// ---------------------------------------------------------------------------

/// Observer that assembles a [`SearchGraph`] while the engine runs.
///
/// Only structure is recorded (ids, depths, outcomes), never states, so the
/// recorder works for any state type.
#[derive(Debug, Default)]
pub struct GraphRecorder {
    search_policy_digest: Option<String>,
    expansions: Vec<ExpandEvent>,
    /// Event for the most recent pop; committed by `expanded`.
    pending: Option<ExpandEvent>,
    goal_node: Option<u64>,
    rejected_on_pop: Vec<u64>,
    metadata: Option<SearchGraphMetadata>,
}

impl GraphRecorder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A recorder whose metadata is bound to `policy`'s digest.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if the policy cannot be canonicalized.
    pub fn for_policy(policy: &SearchPolicy) -> Result<Self, CanonError> {
        Ok(Self {
            search_policy_digest: Some(policy.digest()?.as_str().to_string()),
            ..Self::default()
        })
    }

    /// The finished graph, or `None` if the run has not reported `finished`.
    #[must_use]
    pub fn into_graph(self) -> Option<SearchGraph> {
        let metadata = self.metadata?;
        Some(SearchGraph {
            expansions: self.expansions,
            metadata,
        })
    }

    fn push_successor(&mut self, outcome: SuccessorOutcome) {
        if let Some(event) = self.pending.as_mut() {
            let index = event.successors.len() as u64;
            event.successors.push(SuccessorRecord { index, outcome });
        }
    }
}

impl<S, C> SearchObserver<S, C> for GraphRecorder {
    fn popped(&mut self, id: NodeId, node: &SearchNode<S, C>) {
        self.pending = Some(ExpandEvent {
            expansion_order: self.expansions.len() as u64,
            node_id: id.as_u64(),
            parent_id: node.parent.map(NodeId::as_u64),
            depth: node.depth,
            successors: Vec::new(),
        });
    }

    fn invalid_on_pop(&mut self, id: NodeId, _node: &SearchNode<S, C>) {
        self.pending = None;
        self.rejected_on_pop.push(id.as_u64());
    }

    fn goal_reached(&mut self, id: NodeId, _node: &SearchNode<S, C>) {
        self.pending = None;
        self.goal_node = Some(id.as_u64());
    }

    fn duplicate(&mut self, _id: NodeId, _node: &SearchNode<S, C>) {
        self.pending = None;
    }

    fn rejected(&mut self, _parent: NodeId, _state: &S) {
        self.push_successor(SuccessorOutcome::RejectedByInvariant);
    }

    fn enqueued(&mut self, id: NodeId, _node: &SearchNode<S, C>) {
        self.push_successor(SuccessorOutcome::Enqueued {
            to_node: id.as_u64(),
        });
    }

    fn expanded(&mut self, _id: NodeId, _generated: usize, _enqueued: usize) {
        if let Some(event) = self.pending.take() {
            self.expansions.push(event);
        }
    }

    fn finished(&mut self, order: SearchOrder, termination: &TerminationReason, stats: &SearchStats) {
        // A budget stop between pop and expansion leaves an unexpanded event.
        self.pending = None;
        self.metadata = Some(SearchGraphMetadata {
            order,
            search_policy_digest: self.search_policy_digest.clone(),
            termination_reason: *termination,
            goal_node: self.goal_node,
            rejected_on_pop: std::mem::take(&mut self.rejected_on_pop),
            total_pops: stats.pops,
            total_expansions: stats.expansions,
            total_duplicates_skipped: stats.duplicates_skipped,
            total_invariant_rejections: stats.invariant_rejections,
            total_nodes_created: stats.nodes_created,
            frontier_high_water: stats.frontier_high_water,
        });
    }
}
