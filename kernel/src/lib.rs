//! Reach Kernel: state-space descriptors and trace proofs.
//!
//! # API Surface
//!
//! - [`space::StateSpace`] -- immutable description of a puzzle's state space
//!   (start state, transition generator, invariant, optional cost function)
//! - [`space::Transition`] -- explicit transition descriptor applied to a copy of a state
//! - [`proof::trace::trace_digest`] -- content-addressed digest of a solution trace
//! - [`proof::replay::replay_verify`] -- verify a trace by re-deriving every step
//!
//! # Module Dependency Direction
//!
//! `space` ← `proof`
//!
//! One-way only. `proof` reads descriptors; `space` depends on nothing internal.
//! The kernel performs no search; that lives in `reach_search`.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod proof;
pub mod space;
