//! Dependency insight: orders the edges of a resolution report for display.
//!
//! The ordering itself lives in [`ordering`]; it is parametrised by a
//! [`matcher::VersionComparator`] so that version semantics (Maven, semver,
//! or a test fake) are injected by the caller.

pub mod graph;
pub mod matcher;
pub mod ordering;
pub mod version;
