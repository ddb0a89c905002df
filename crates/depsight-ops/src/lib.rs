pub mod ops_insight;
pub mod ops_sort;

use std::path::Path;

use depsight_core::config::{GlobalConfig, VersionScheme};
use depsight_core::edge::DependencyEdge;
use depsight_core::report::EdgeReport;
use depsight_insight::matcher::{self, VersionComparator};
use depsight_insight::ordering;
use depsight_util::errors::DepsightError;

/// A CLI flag wins over the configured scheme.
pub fn effective_scheme(flag: Option<VersionScheme>, config: &GlobalConfig) -> VersionScheme {
    flag.unwrap_or(config.insight.scheme)
}

/// Build the comparator for the scheme in effect.
pub fn comparator(flag: Option<VersionScheme>, config: &GlobalConfig) -> Box<dyn VersionComparator> {
    let scheme = effective_scheme(flag, config);
    tracing::debug!("Comparing versions with the {scheme} scheme");
    matcher::comparator_for(scheme)
}

/// Load an edge report, keep the edges matching `filter` (all when `None`), and order them.
pub fn load_sorted(
    report_path: &Path,
    comparator: &dyn VersionComparator,
    filter: Option<&str>,
) -> Result<Vec<DependencyEdge>, DepsightError> {
    let report = EdgeReport::from_path(report_path)?;
    let edges: Vec<DependencyEdge> = match filter {
        Some(key) => report
            .edge
            .into_iter()
            .filter(|e| e.matches_key(key))
            .collect(),
        None => report.edge,
    };
    ordering::sort(edges, comparator)
}
