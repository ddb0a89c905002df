//! Deterministic presentation order for the edges of a dependency report.
//!
//! Edges are ordered by what they requested:
//! 1. Project selectors before module selectors
//! 2. Projects by path
//! 3. Modules by group, then module name, then:
//!    - an edge whose request was satisfied exactly sorts before one that
//!      was overridden by conflict resolution
//!    - static requests sort before dynamic ones
//!    - dynamic requests textually, static ones semantically
//!    - finally by the declaring component (`from`), using the same kind
//!      and field order with a plain version comparison
//!
//! The ordering never decides which version wins; it only presents edges
//! that were already resolved.

use std::cmp::Ordering;

use depsight_core::component::{ComponentIdentifier, ComponentSelector};
use depsight_core::edge::DependencyEdge;
use depsight_util::errors::DepsightError;

use crate::matcher::VersionComparator;

/// Borrowed view shared by selectors and identifiers so both levels of the
/// ordering run through the same comparison.
#[derive(Debug, Clone, Copy)]
enum ComponentKey<'a> {
    Project {
        path: &'a str,
    },
    Module {
        group: &'a str,
        module: &'a str,
        version: &'a str,
    },
}

impl<'a> ComponentKey<'a> {
    fn of_selector(selector: &'a ComponentSelector) -> Option<Self> {
        match selector {
            ComponentSelector::Project { path } => Some(Self::Project { path }),
            ComponentSelector::Module {
                group,
                module,
                version,
            } => Some(Self::Module {
                group,
                module,
                version,
            }),
            ComponentSelector::Other(_) => None,
        }
    }

    fn of_identifier(id: &'a ComponentIdentifier) -> Option<Self> {
        match id {
            ComponentIdentifier::Project { path } => Some(Self::Project { path }),
            ComponentIdentifier::Module {
                group,
                module,
                version,
            } => Some(Self::Module {
                group,
                module,
                version,
            }),
            ComponentIdentifier::Other(_) => None,
        }
    }

    fn has_empty_version(&self) -> bool {
        matches!(self, Self::Module { version, .. } if version.trim().is_empty())
    }
}

/// Kind precedence, then path or group/module; `by_version` breaks module ties.
fn compare_keys(
    left: ComponentKey<'_>,
    right: ComponentKey<'_>,
    by_version: impl FnOnce(&str, &str) -> Ordering,
) -> Ordering {
    match (left, right) {
        (ComponentKey::Project { .. }, ComponentKey::Module { .. }) => Ordering::Less,
        (ComponentKey::Module { .. }, ComponentKey::Project { .. }) => Ordering::Greater,
        (ComponentKey::Project { path: l }, ComponentKey::Project { path: r }) => l.cmp(r),
        (
            ComponentKey::Module {
                group: lg,
                module: lm,
                version: lv,
            },
            ComponentKey::Module {
                group: rg,
                module: rm,
                version: rv,
            },
        ) => lg
            .cmp(rg)
            .then_with(|| lm.cmp(rm))
            .then_with(|| by_version(lv, rv)),
    }
}

/// The validated keys of one edge.
struct EdgeKeys<'a> {
    requested: ComponentKey<'a>,
    from: ComponentKey<'a>,
}

fn validate(edge: &DependencyEdge) -> Result<EdgeKeys<'_>, DepsightError> {
    let requested = edge
        .requested
        .as_ref()
        .ok_or_else(|| DepsightError::InvalidEdge {
            edge: edge.to_string(),
            message: "the requested component selector may not be absent".to_string(),
        })?;
    let requested =
        ComponentKey::of_selector(requested).ok_or_else(|| DepsightError::UnsupportedSelectorKind {
            edge: edge.to_string(),
            kind: requested.kind().to_string(),
        })?;
    let from = ComponentKey::of_identifier(&edge.from).ok_or_else(|| {
        DepsightError::UnsupportedSelectorKind {
            edge: edge.to_string(),
            kind: edge.from.kind().to_string(),
        }
    })?;
    if requested.has_empty_version() || from.has_empty_version() {
        return Err(DepsightError::InvalidEdge {
            edge: edge.to_string(),
            message: "module version may not be empty".to_string(),
        });
    }
    Ok(EdgeKeys { requested, from })
}

/// Whether the edge resolved to exactly what it requested: the same project
/// path, or the same group and module at the version the matcher accepts.
///
/// Substitutions to another module never count, whatever their version.
pub fn is_strict_match<M: VersionComparator + ?Sized>(edge: &DependencyEdge, matcher: &M) -> bool {
    match (&edge.requested, &edge.actual) {
        (
            Some(ComponentSelector::Module {
                group,
                module,
                version,
            }),
            ComponentIdentifier::Module {
                group: actual_group,
                module: actual_module,
                ..
            },
        ) => {
            group == actual_group
                && module == actual_module
                && matcher.matches_strictly(version, &edge.actual)
        }
        (Some(ComponentSelector::Project { path }), ComponentIdentifier::Project { path: actual }) => {
            path == actual
        }
        _ => false,
    }
}

/// Pairwise edge comparison backed by an injected [`VersionComparator`].
pub struct EdgeOrdering<'a, M: VersionComparator + ?Sized> {
    matcher: &'a M,
}

impl<'a, M: VersionComparator + ?Sized> EdgeOrdering<'a, M> {
    pub fn new(matcher: &'a M) -> Self {
        Self { matcher }
    }

    /// Compare two edges, validating both first.
    pub fn compare(
        &self,
        left: &DependencyEdge,
        right: &DependencyEdge,
    ) -> Result<Ordering, DepsightError> {
        let l = validate(left)?;
        let r = validate(right)?;
        Ok(self.compare_validated(left, &l, right, &r))
    }

    fn compare_validated(
        &self,
        left: &DependencyEdge,
        l: &EdgeKeys<'_>,
        right: &DependencyEdge,
        r: &EdgeKeys<'_>,
    ) -> Ordering {
        compare_keys(l.requested, r.requested, |lv, rv| {
            self.compare_requested_versions(left, lv, right, rv)
                .then_with(|| self.compare_origins(l.from, r.from))
        })
    }

    fn compare_requested_versions(
        &self,
        left: &DependencyEdge,
        lv: &str,
        right: &DependencyEdge,
        rv: &str,
    ) -> Ordering {
        // A request satisfied exactly by the resolved component is listed first.
        match (
            is_strict_match(left, self.matcher),
            is_strict_match(right, self.matcher),
        ) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            _ => {}
        }

        let left_dynamic = self.matcher.is_dynamic(lv);
        let right_dynamic = self.matcher.is_dynamic(rv);
        match (left_dynamic, right_dynamic) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            // Dynamic expressions have no semantic order.
            (true, true) => lv.cmp(rv),
            (false, false) => self.matcher.compare(lv, rv),
        }
    }

    fn compare_origins(&self, left: ComponentKey<'_>, right: ComponentKey<'_>) -> Ordering {
        compare_keys(left, right, |lv, rv| self.matcher.compare(lv, rv))
    }
}

/// Stably sort `edges` for display.
///
/// Every edge is validated before any reordering happens; the first
/// malformed edge aborts the whole call.
pub fn sort<M: VersionComparator + ?Sized>(
    edges: Vec<DependencyEdge>,
    matcher: &M,
) -> Result<Vec<DependencyEdge>, DepsightError> {
    tracing::debug!("Ordering {} dependency edges", edges.len());

    let mut keyed = Vec::with_capacity(edges.len());
    for (i, edge) in edges.iter().enumerate() {
        match validate(edge) {
            Ok(keys) => keyed.push((edge, keys)),
            Err(e) => {
                tracing::warn!("Rejecting dependency edge #{i}: {e}");
                return Err(e);
            }
        }
    }

    let ordering = EdgeOrdering::new(matcher);
    let mut order: Vec<usize> = (0..keyed.len()).collect();
    order.sort_by(|&a, &b| {
        let (left, l) = &keyed[a];
        let (right, r) = &keyed[b];
        ordering.compare_validated(left, l, right, r)
    });
    drop(keyed);

    let mut slots: Vec<Option<DependencyEdge>> = edges.into_iter().map(Some).collect();
    Ok(order
        .into_iter()
        .filter_map(|i| slots[i].take())
        .collect())
}
