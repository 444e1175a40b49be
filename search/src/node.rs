//! Search nodes and the per-run node arena.
//!
//! Parent links are arena indices, not pointers: every node of a run lives in
//! one `Vec` owned by that run and is released with it, including the nodes
//! along the returned solution path.

/// Index of a node inside its run's [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(usize);

impl NodeId {
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }

    /// Stable numeric id used in audit artifacts.
    #[must_use]
    pub fn as_u64(self) -> u64 {
        self.0 as u64
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "n{}", self.0)
    }
}

/// A state discovered during search, linked to the node it was expanded from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchNode<S, C> {
    /// `None` only for the root.
    pub parent: Option<NodeId>,
    pub state: S,
    /// Cumulative cost (`()` when the descriptor has no cost function).
    pub cost: C,
    /// Number of transitions from the root.
    pub depth: u32,
}

/// Append-only storage for every node created in one run.
#[derive(Debug, Clone)]
pub struct NodeArena<S, C> {
    nodes: Vec<SearchNode<S, C>>,
}

impl<S, C> NodeArena<S, C> {
    #[must_use]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Create a root node (no parent, depth 0).
    pub fn push_root(&mut self, state: S, cost: C) -> NodeId {
        self.insert(SearchNode {
            parent: None,
            state,
            cost,
            depth: 0,
        })
    }

    /// Create a child of `parent`, one transition deeper.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not issued by this arena.
    pub fn push_child(&mut self, parent: NodeId, state: S, cost: C) -> NodeId {
        let depth = self.get(parent).depth.saturating_add(1);
        self.insert(SearchNode {
            parent: Some(parent),
            state,
            cost,
            depth,
        })
    }

    fn insert(&mut self, node: SearchNode<S, C>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// # Panics
    ///
    /// Panics if `id` was not issued by this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &SearchNode<S, C> {
        &self.nodes[id.0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node ids from the root down to `id`, inclusive.
    #[must_use]
    pub fn path_ids(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::with_capacity(self.get(id).depth as usize + 1);
        let mut current = Some(id);
        while let Some(node_id) = current {
            path.push(node_id);
            current = self.get(node_id).parent;
        }
        path.reverse();
        path
    }

    /// States from the root down to `id`, inclusive. Read-only.
    #[must_use]
    pub fn trace(&self, id: NodeId) -> Vec<S>
    where
        S: Clone,
    {
        self.path_ids(id)
            .into_iter()
            .map(|node_id| self.get(node_id).state.clone())
            .collect()
    }
}

impl<S, C> Default for NodeArena<S, C> {
    fn default() -> Self {
        Self::new()
    }
}
