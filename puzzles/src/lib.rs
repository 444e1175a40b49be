//! Reach Puzzles: reference puzzles for the reachability engine.
//!
//! Each module describes one puzzle as a [`reach_kernel::space::StateSpace`]
//! plus a goal predicate:
//!
//! - [`crossing`] -- goat, wolf and cabbage
//! - [`frogs`] -- leaping frogs, any number per colour
//! - [`family`] -- Japanese river crossing with three cost models
//!
//! [`runner::solve`] ties a puzzle to a policy and observers; the `solve`
//! binary is a thin command line over it.

#![forbid(unsafe_code)]

pub mod crossing;
pub mod error;
pub mod family;
pub mod frogs;
pub mod runner;

pub use error::PuzzleError;
pub use runner::{solve, Puzzle, RunError, Solution};
