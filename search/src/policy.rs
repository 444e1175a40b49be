//! Search policy: ordering and optional budgets for one run.

use std::str::FromStr;

use reach_kernel::proof::canon::{canonical_json_bytes, CanonError};
use reach_kernel::proof::hash::{canonical_hash, ContentHash};
use reach_kernel::proof::hash_domain::HashDomain;

use crate::error::SearchError;

/// Frontier ordering policy, fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchOrder {
    /// Pop the earliest-inserted node (FIFO). Finds minimum-length paths.
    #[default]
    BreadthFirst,
    /// Pop the most recently inserted node (LIFO).
    DepthFirst,
    /// Pop the node with the lowest cumulative cost; ties by insertion order.
    /// Requires a descriptor with a cost function.
    CheapestFirst,
}

impl SearchOrder {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "breadth_first",
            Self::DepthFirst => "depth_first",
            Self::CheapestFirst => "cheapest_first",
        }
    }
}

impl std::fmt::Display for SearchOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOrder {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bfs" | "breadth-first" | "breadth_first" => Ok(Self::BreadthFirst),
            "dfs" | "depth-first" | "depth_first" => Ok(Self::DepthFirst),
            "cheapest" | "cheapest-first" | "cheapest_first" => Ok(Self::CheapestFirst),
            other => Err(SearchError::UnsupportedOrder {
                detail: format!("unknown order {other:?} (expected bfs, dfs or cheapest)"),
            }),
        }
    }
}

/// Ordering plus optional budgets.
///
/// The baseline search is unbounded: on an infinite space with an
/// unsatisfiable goal it never returns. Budgets turn that into a normal
/// termination with an empty trace.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPolicy {
    /// Requested ordering. Superseded by cheapest-first on cost-enabled descriptors.
    pub order: SearchOrder,
    /// Cap on node expansions (states added to the visited set).
    pub max_expansions: Option<u64>,
    /// Cap on search nodes created, root included.
    pub max_nodes: Option<u64>,
}

impl SearchPolicy {
    /// Unbounded policy with the given order.
    #[must_use]
    pub fn with_order(order: SearchOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// Check this policy against a descriptor.
    ///
    /// # Errors
    ///
    /// - [`SearchError::UnsupportedOrder`] if cheapest-first is requested on a
    ///   descriptor without a cost function.
    /// - [`SearchError::InvalidBudget`] if a budget is zero.
    pub fn validate(&self, cost_enabled: bool) -> Result<(), SearchError> {
        if self.order == SearchOrder::CheapestFirst && !cost_enabled {
            return Err(SearchError::UnsupportedOrder {
                detail: "cheapest_first requires a state space with a cost function".into(),
            });
        }
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidBudget {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        if self.max_nodes == Some(0) {
            return Err(SearchError::InvalidBudget {
                detail: "max_nodes must be at least 1 (the root node)".into(),
            });
        }
        Ok(())
    }

    /// The order the engine actually runs: cost-enabled descriptors always
    /// search cheapest-first.
    #[must_use]
    pub fn effective_order(&self, cost_enabled: bool) -> SearchOrder {
        if cost_enabled {
            SearchOrder::CheapestFirst
        } else {
            self.order
        }
    }

    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "max_expansions": self.max_expansions,
            "max_nodes": self.max_nodes,
            "order": self.order.as_str(),
        })
    }

    /// Content address of this policy.
    ///
    /// # Errors
    ///
    /// Propagates [`CanonError`] from canonicalization.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = canonical_json_bytes(&self.to_json())?;
        Ok(canonical_hash(HashDomain::SearchPolicy, &bytes))
    }
}
