//! The version-comparison capability injected into the edge ordering.

use std::cmp::Ordering;

use depsight_core::component::ComponentIdentifier;
use depsight_core::config::VersionScheme;

use crate::version::{MavenVersion, VersionExpr};

/// Version semantics supplied by the caller of the ordering policy.
///
/// Implementations must be pure: the same inputs always give the same answer.
pub trait VersionComparator: Send + Sync {
    /// True if the expression denotes a moving target rather than one fixed version.
    fn is_dynamic(&self, version: &str) -> bool;

    /// Semantic ordering of two static version expressions.
    fn compare(&self, left: &str, right: &str) -> Ordering;

    /// True if `actual` carries exactly the version `requested` names.
    ///
    /// Only the version is checked; module identity is the caller's concern.
    fn matches_strictly(&self, requested: &str, actual: &ComponentIdentifier) -> bool;
}

/// Maven and Gradle version semantics.
#[derive(Debug, Clone, Copy, Default)]
pub struct MavenVersionMatcher;

impl VersionComparator for MavenVersionMatcher {
    fn is_dynamic(&self, version: &str) -> bool {
        VersionExpr::parse(version).is_dynamic()
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        MavenVersion::parse(left).cmp(&MavenVersion::parse(right))
    }

    fn matches_strictly(&self, requested: &str, actual: &ComponentIdentifier) -> bool {
        let Some(actual) = actual.version() else {
            return false;
        };
        // Textual, like Gradle: `1.0` does not strictly match `1.0.0`.
        match VersionExpr::parse(requested) {
            VersionExpr::Static(wanted) => wanted.original == actual,
            VersionExpr::Range(range) => range.exact().is_some_and(|exact| exact.original == actual),
            VersionExpr::Prefix(_) | VersionExpr::Latest(_) => false,
        }
    }
}

/// Semantic Versioning 2.0 semantics backed by the `semver` crate.
///
/// Any expression that is not a single `x.y.z[-pre][+build]` version
/// (optionally written `=x.y.z`) is treated as dynamic.
#[derive(Debug, Clone, Copy, Default)]
pub struct SemverMatcher;

fn parse_exact(version: &str) -> Option<semver::Version> {
    let v = version.trim();
    let v = v.strip_prefix('=').unwrap_or(v).trim();
    semver::Version::parse(v).ok()
}

impl VersionComparator for SemverMatcher {
    fn is_dynamic(&self, version: &str) -> bool {
        parse_exact(version).is_none()
    }

    fn compare(&self, left: &str, right: &str) -> Ordering {
        // Unparsable versions sort after valid ones, textually among themselves.
        match (parse_exact(left), parse_exact(right)) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => left.cmp(right),
        }
    }

    fn matches_strictly(&self, requested: &str, actual: &ComponentIdentifier) -> bool {
        match (parse_exact(requested), actual.version().and_then(parse_exact)) {
            (Some(wanted), Some(actual)) => wanted == actual,
            _ => false,
        }
    }
}

/// Build the comparator for a configured scheme.
pub fn comparator_for(scheme: VersionScheme) -> Box<dyn VersionComparator> {
    match scheme {
        VersionScheme::Maven => Box::new(MavenVersionMatcher),
        VersionScheme::Semver => Box::new(SemverMatcher),
    }
}
