//! Reach Search: the reachability engine.
//!
//! Explores a [`reach_kernel::space::StateSpace`] breadth-first, depth-first
//! or cheapest-first until a caller-supplied goal holds, then rebuilds the
//! witness path from parent links.
//!
//! # Crate dependency graph
//!
//! ```text
//! reach_kernel  ←  reach_search  ←  reach_puzzles
//! (descriptor,     (frontier,        (crossing, frogs,
//!  proof)           visited, engine)  family, solve)
//! ```
//!
//! # Key types
//!
//! - [`search::run`] -- one run under a [`SearchPolicy`], reporting to a [`SearchObserver`]
//! - [`Reachability`] -- `space.search(goal, order)` convenience
//! - [`Frontier`] -- FIFO, LIFO or cheapest-first pending set
//! - [`VisitedSet`] -- states already expanded
//! - [`NodeArena`] -- search nodes with parent links
//! - [`SearchGraph`] -- expansion-event audit log

#![forbid(unsafe_code)]

pub mod error;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod observer;
pub mod policy;
pub mod search;
pub mod visited;

pub use error::SearchError;
pub use frontier::Frontier;
pub use graph::{GraphRecorder, SearchGraph};
pub use node::{NodeArena, NodeId, SearchNode};
pub use observer::{LogObserver, NoopObserver, SearchObserver, Tee};
pub use policy::{SearchOrder, SearchPolicy};
pub use search::{run, Reachability, SearchOutcome, SearchStats, TerminationReason};
pub use visited::VisitedSet;
