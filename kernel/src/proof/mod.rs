//! Proof module: canonical JSON, domain-separated hashing, trace digests and
//! replay verification of solution traces.
//!
//! Depends on `space`. Nothing depends on `proof` within the kernel.

pub mod canon;
pub mod hash;
pub mod hash_domain;
pub mod replay;
pub mod trace;
