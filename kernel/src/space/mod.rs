//! State-space description: what exists, not what we are looking for.

pub mod state_space;
pub mod transition;

pub use state_space::StateSpace;
pub use transition::{successor, Transition};
