//! Shared fixtures for the lock tests.

pub mod fixture;
