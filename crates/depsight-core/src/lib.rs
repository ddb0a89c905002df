//! Core data types for depsight.
//!
//! This crate defines the values the ordering policy reads: the selector a
//! consumer requested, the identifier the resolution engine produced, the
//! edge tying them to the declaring component, edge report files, and the
//! global configuration.
//!
//! This crate is intentionally free of ordering logic and network I/O.

pub mod component;
pub mod config;
pub mod edge;
pub mod report;
