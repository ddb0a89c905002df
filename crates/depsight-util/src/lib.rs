//! Shared utilities for depsight.
//!
//! This crate provides the cross-cutting error type used by every other
//! depsight crate.

pub mod errors;
